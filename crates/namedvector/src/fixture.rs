//! RAII fixture that checks a counter returns to zero

use crate::counter::LiveCounter;
use crate::error::{LifecycleError, Result};

/// RAII guard that zeroes a counter on creation and checks it on teardown.
///
/// Creating the guard is the setup step. Calling [`finish`](Self::finish)
/// or dropping the guard is the teardown step: a nonzero live count means
/// something leaked or was released twice. A strict guard panics on drop
/// in that case (unless the thread is already unwinding).
///
/// # Example
///
/// ```
/// use namedvector::{CounterGuard, Name};
///
/// let guard = CounterGuard::ambient();
/// {
///     let foo = Name::new("Foo");
///     let _bar = foo.clone();
///     assert_eq!(guard.live(), 2);
/// }
/// guard.finish().unwrap();
/// ```
#[derive(Debug)]
pub struct CounterGuard {
    counter: LiveCounter,
    strict: bool,
    checked: bool,
}

impl CounterGuard {
    /// Zero `counter` and guard it strictly.
    pub fn new(counter: LiveCounter) -> Self {
        Self::with_strict(counter, true)
    }

    /// Zero `counter` and guard it, choosing whether drop panics.
    pub fn with_strict(counter: LiveCounter, strict: bool) -> Self {
        counter.reset();
        Self {
            counter,
            strict,
            checked: false,
        }
    }

    /// Zero the calling thread's ambient counter and guard it strictly.
    pub fn ambient() -> Self {
        Self::new(LiveCounter::ambient())
    }

    /// The guarded counter.
    pub fn counter(&self) -> &LiveCounter {
        &self.counter
    }

    /// Current live count of the guarded counter.
    pub fn live(&self) -> isize {
        self.counter.live()
    }

    /// Whether dropping an unbalanced guard panics.
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Check the counter without consuming the guard.
    pub fn check(&self) -> Result<()> {
        match self.counter.live() {
            0 => Ok(()),
            live => Err(LifecycleError::LiveInstances {
                label: self.counter.label().to_string(),
                live,
            }),
        }
    }

    /// Teardown: verify the count is zero.
    pub fn finish(mut self) -> Result<()> {
        self.checked = true;
        let outcome = self.check();
        tracing::debug!(
            counter = %self.counter.label(),
            snapshot = ?self.counter.snapshot(),
            ok = outcome.is_ok(),
            "counter guard finished"
        );
        outcome
    }
}

impl Drop for CounterGuard {
    fn drop(&mut self) {
        if self.checked {
            return;
        }
        if let Err(err) = self.check() {
            tracing::warn!(error = %err, "counter guard dropped with live instances");
            if self.strict && !std::thread::panicking() {
                panic!("{err}");
            }
        }
    }
}
