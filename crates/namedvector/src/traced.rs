//! Lifecycle tracer: a wrapper that records how it is built, copied,
//! moved, assigned and dropped

use std::fmt;
use std::mem;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// What happened to a traced value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Built from a plain value
    Constructed,
    /// Produced by `clone`
    Cloned,
    /// Overwritten by `clone_from`
    Assigned,
    /// Moved out with `take`, or handed back to the source by `move_assign`
    Moved,
    /// Overwritten by `move_assign`
    MoveAssigned,
    /// Dropped
    Dropped,
}

/// One recorded event.
///
/// `value` is the wrapped value the event applies to: the new value for
/// constructions, clones and moves, the overwritten value for
/// assignments, and the final value for drops.
#[derive(Debug, Clone, PartialEq)]
pub struct LifecycleEvent<T> {
    /// What happened
    pub kind: EventKind,
    /// The value involved
    pub value: T,
}

/// A shared, append-only record of lifecycle events.
///
/// Cloning the log clones the handle; every traced value holds one.
#[derive(Debug)]
pub struct EventLog<T> {
    events: Arc<Mutex<Vec<LifecycleEvent<T>>>>,
}

impl<T> Clone for EventLog<T> {
    fn clone(&self) -> Self {
        Self {
            events: Arc::clone(&self.events),
        }
    }
}

impl<T> Default for EventLog<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> EventLog<T> {
    /// Create an empty log.
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<LifecycleEvent<T>>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record(&self, kind: EventKind, value: T)
    where
        T: fmt::Debug,
    {
        tracing::debug!(?kind, ?value, "lifecycle event");
        self.lock().push(LifecycleEvent { kind, value });
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Recorded event kinds, in order.
    pub fn kinds(&self) -> Vec<EventKind> {
        self.lock().iter().map(|event| event.kind).collect()
    }

    /// Number of events of one kind.
    pub fn count(&self, kind: EventKind) -> usize {
        self.lock().iter().filter(|event| event.kind == kind).count()
    }

    /// Forget everything recorded so far.
    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl<T: Clone> EventLog<T> {
    /// Copy of every recorded event, in order.
    pub fn events(&self) -> Vec<LifecycleEvent<T>> {
        self.lock().clone()
    }
}

/// A value wrapper that reports its own lifecycle to an [`EventLog`].
///
/// # Example
///
/// ```
/// use namedvector::{EventKind, EventLog, Traced};
///
/// let log = EventLog::new();
/// {
///     let a = Traced::new(1, &log);
///     let _b = a.clone();
/// }
/// assert_eq!(
///     log.kinds(),
///     vec![
///         EventKind::Constructed,
///         EventKind::Cloned,
///         EventKind::Dropped,
///         EventKind::Dropped,
///     ]
/// );
/// ```
pub struct Traced<T: Clone + fmt::Debug> {
    value: T,
    log: EventLog<T>,
}

impl<T: Clone + fmt::Debug> Traced<T> {
    /// Wrap `value`, recording a construction.
    pub fn new(value: T, log: &EventLog<T>) -> Self {
        log.record(EventKind::Constructed, value.clone());
        Self {
            value,
            log: log.clone(),
        }
    }

    /// The wrapped value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// The log this value reports to.
    pub fn log(&self) -> &EventLog<T> {
        &self.log
    }

    /// Overwrite with `source`'s value, handing ours back to `source`.
    ///
    /// Records the value being overwritten, then the value `source` is
    /// left holding.
    pub fn move_assign(&mut self, source: &mut Self) {
        self.log.record(EventKind::MoveAssigned, self.value.clone());
        mem::swap(&mut self.value, &mut source.value);
        self.log.record(EventKind::Moved, source.value.clone());
    }
}

impl<T: Clone + fmt::Debug + Default> Traced<T> {
    /// Move the value into a new wrapper, leaving `T::default()` behind.
    pub fn take(&mut self) -> Self {
        let value = mem::take(&mut self.value);
        self.log.record(EventKind::Moved, value.clone());
        Self {
            value,
            log: self.log.clone(),
        }
    }
}

impl<T: Clone + fmt::Debug> Clone for Traced<T> {
    fn clone(&self) -> Self {
        self.log.record(EventKind::Cloned, self.value.clone());
        Self {
            value: self.value.clone(),
            log: self.log.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.log.record(EventKind::Assigned, self.value.clone());
        self.value.clone_from(&source.value);
    }
}

impl<T: Clone + fmt::Debug> Drop for Traced<T> {
    fn drop(&mut self) {
        self.log.record(EventKind::Dropped, self.value.clone());
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Traced<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Traced").field(&self.value).finish()
    }
}
