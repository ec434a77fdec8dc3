//! The counted value: a short text payload registered with a live counter

use std::fmt;

use crate::counter::LiveCounter;

/// A text value that counts its own live instances.
///
/// Every construction (`new`, `new_in`, `default`, `clone`) adds one to
/// the counter the value is registered with, and every drop removes one.
/// `clone_from` is assignment: it replaces the payload and leaves the
/// count untouched. Equality looks at the payload only.
///
/// # Example
///
/// ```
/// use namedvector::{LiveCounter, Name};
///
/// let counter = LiveCounter::new();
/// let foo = Name::new_in("Foo", &counter);
/// let mut bar = Name::new_in("Bar", &counter);
///
/// bar.clone_from(&foo);
/// assert_eq!(bar, foo);
/// assert_eq!(counter.live(), 2);
/// ```
pub struct Name {
    value: String,
    counter: LiveCounter,
}

impl Name {
    /// Create a name registered with the calling thread's ambient counter.
    pub fn new(value: impl Into<String>) -> Self {
        Self::new_in(value, &LiveCounter::ambient())
    }

    /// Create a name registered with `counter`.
    pub fn new_in(value: impl Into<String>, counter: &LiveCounter) -> Self {
        counter.acquire();
        Self {
            value: value.into(),
            counter: counter.clone(),
        }
    }

    /// Allocate an independent copy of `name` on the heap.
    pub fn boxed_copy(name: &Name) -> Box<Name> {
        Box::new(name.clone())
    }

    /// The payload.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Replace the payload.
    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// The counter this name is registered with.
    pub fn counter(&self) -> &LiveCounter {
        &self.counter
    }
}

impl Default for Name {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl Clone for Name {
    fn clone(&self) -> Self {
        Self::new_in(self.value.clone(), &self.counter)
    }

    fn clone_from(&mut self, source: &Self) {
        // Assignment keeps our registration; no instance is created or destroyed.
        self.value.clone_from(&source.value);
    }
}

impl Drop for Name {
    fn drop(&mut self) {
        self.counter.release();
    }
}

impl PartialEq for Name {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Name {}

impl PartialEq<str> for Name {
    fn eq(&self, other: &str) -> bool {
        self.value == other
    }
}

impl PartialEq<&str> for Name {
    fn eq(&self, other: &&str) -> bool {
        self.value == *other
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Name").field(&self.value).finish()
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
