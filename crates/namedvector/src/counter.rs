//! Live-instance counting

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicIsize, AtomicUsize, Ordering};
use std::sync::Arc;

thread_local! {
    static AMBIENT: LiveCounter = LiveCounter::labelled("ambient");
}

#[derive(Debug)]
struct CounterState {
    label: String,
    live: AtomicIsize,
    constructed: AtomicUsize,
    destroyed: AtomicUsize,
    trace: AtomicBool,
}

/// A shared count of live instances.
///
/// Cloning a `LiveCounter` clones the handle, not the count: every clone
/// observes and mutates the same numbers. Each counted value keeps a
/// handle to the counter it was registered with, so it is released
/// against the same counter no matter where it is dropped.
///
/// # Example
///
/// ```
/// use namedvector::{LiveCounter, Name};
///
/// let counter = LiveCounter::new();
/// {
///     let foo = Name::new_in("Foo", &counter);
///     let _copy = foo.clone();
///     assert_eq!(counter.live(), 2);
/// }
/// assert_eq!(counter.live(), 0);
/// ```
#[derive(Clone)]
pub struct LiveCounter {
    inner: Arc<CounterState>,
}

/// A point-in-time reading of a [`LiveCounter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterSnapshot {
    /// Instances alive at the time of the reading
    pub live: isize,
    /// Construction events since the last reset
    pub constructed: usize,
    /// Destruction events since the last reset
    pub destroyed: usize,
}

impl Default for LiveCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl LiveCounter {
    /// Create a fresh counter labelled `"names"`.
    pub fn new() -> Self {
        Self::labelled("names")
    }

    /// Create a fresh counter with a label used in log records and errors.
    pub fn labelled(label: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(CounterState {
                label: label.into(),
                live: AtomicIsize::new(0),
                constructed: AtomicUsize::new(0),
                destroyed: AtomicUsize::new(0),
                trace: AtomicBool::new(false),
            }),
        }
    }

    /// The calling thread's default counter.
    ///
    /// Values built without an explicit counter register here. The test
    /// harness runs every test on its own thread, which gives each test
    /// an isolated count.
    pub fn ambient() -> Self {
        AMBIENT.with(Clone::clone)
    }

    /// The counter's label.
    pub fn label(&self) -> &str {
        &self.inner.label
    }

    /// Number of instances currently alive.
    pub fn live(&self) -> isize {
        self.inner.live.load(Ordering::Relaxed)
    }

    /// Construction events since the last reset.
    pub fn constructed(&self) -> usize {
        self.inner.constructed.load(Ordering::Relaxed)
    }

    /// Destruction events since the last reset.
    pub fn destroyed(&self) -> usize {
        self.inner.destroyed.load(Ordering::Relaxed)
    }

    /// Read all three numbers at once.
    pub fn snapshot(&self) -> CounterSnapshot {
        CounterSnapshot {
            live: self.live(),
            constructed: self.constructed(),
            destroyed: self.destroyed(),
        }
    }

    /// Zero every number.
    ///
    /// Instances that are still alive will drive `live` negative when
    /// they drop; the count is never clamped.
    pub fn reset(&self) {
        self.inner.live.store(0, Ordering::Relaxed);
        self.inner.constructed.store(0, Ordering::Relaxed);
        self.inner.destroyed.store(0, Ordering::Relaxed);
    }

    /// Record one construction.
    pub fn acquire(&self) {
        let live = self.inner.live.fetch_add(1, Ordering::Relaxed) + 1;
        self.inner.constructed.fetch_add(1, Ordering::Relaxed);
        if self.is_tracing() {
            tracing::trace!(counter = %self.label(), live, "instance constructed");
        }
    }

    /// Record one destruction.
    pub fn release(&self) {
        let live = self.inner.live.fetch_sub(1, Ordering::Relaxed) - 1;
        self.inner.destroyed.fetch_add(1, Ordering::Relaxed);
        if self.is_tracing() {
            tracing::trace!(counter = %self.label(), live, "instance destroyed");
        }
    }

    /// Enable or disable per-instance trace records.
    pub fn set_trace(&self, trace: bool) {
        self.inner.trace.store(trace, Ordering::Relaxed);
    }

    /// Whether per-instance trace records are emitted.
    pub fn is_tracing(&self) -> bool {
        self.inner.trace.load(Ordering::Relaxed)
    }

    /// Whether two handles share one count.
    pub fn same_as(&self, other: &LiveCounter) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for LiveCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LiveCounter")
            .field("label", &self.label())
            .field("live", &self.live())
            .finish()
    }
}
