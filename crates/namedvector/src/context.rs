//! Tracking configuration

use crate::counter::LiveCounter;
use crate::fixture::CounterGuard;

/// Configuration for counters and the guards that check them.
#[derive(Debug, Clone)]
pub struct TrackingContext {
    /// Label given to counters built from this context
    pub label: String,

    /// Emit a trace record on every construction and destruction
    pub trace: bool,

    /// Panic when a guard is dropped with live instances remaining
    pub strict: bool,
}

impl Default for TrackingContext {
    fn default() -> Self {
        Self {
            label: "names".to_string(),
            trace: false,
            strict: true,
        }
    }
}

impl TrackingContext {
    /// Create a context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context with a custom counter label.
    pub fn with_label(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    /// Create a context whose guards report instead of panicking.
    pub fn lenient() -> Self {
        Self {
            strict: false,
            ..Default::default()
        }
    }

    /// Build a fresh counter configured from this context.
    pub fn counter(&self) -> LiveCounter {
        let counter = LiveCounter::labelled(self.label.clone());
        counter.set_trace(self.trace);
        counter
    }

    /// Build a guard over a fresh counter.
    pub fn guard(&self) -> CounterGuard {
        CounterGuard::with_strict(self.counter(), self.strict)
    }

    /// Build a guard over the calling thread's ambient counter.
    ///
    /// The ambient counter keeps its own label; only the trace flag is
    /// applied.
    pub fn guard_ambient(&self) -> CounterGuard {
        let counter = LiveCounter::ambient();
        counter.set_trace(self.trace);
        CounterGuard::with_strict(counter, self.strict)
    }
}
