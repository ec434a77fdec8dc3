//! A 2D vector that owns its name through a heap allocation

use std::mem;

use crate::error::{LifecycleError, Result};
use crate::name::Name;

/// A named 2D vector whose name lives in its own heap allocation.
///
/// The allocation is owned exclusively: copying allocates a second,
/// independent name; moving (`take`, `move_assign`) hands the allocation
/// over and leaves the source empty; dropping frees it. An empty vector
/// (default or moved-from) owns no name at all.
///
/// # Example
///
/// ```
/// use namedvector::{LiveCounter, Name, NamedVector};
///
/// let counter = LiveCounter::new();
/// let foo = Name::new_in("Foo", &counter);
/// let nv = NamedVector::new(&foo, 10.5, 20.0);
/// let copy = nv.clone();
///
/// assert_ne!(nv.name_ptr(), copy.name_ptr());
/// assert_eq!(nv.name(), copy.name());
/// assert_eq!(counter.live(), 3);
/// ```
#[derive(Debug, Default, PartialEq)]
pub struct NamedVector {
    name: Option<Box<Name>>,

    /// Horizontal component
    pub x: f32,

    /// Vertical component
    pub y: f32,
}

impl NamedVector {
    /// Create a vector owning a fresh copy of `name`.
    pub fn new(name: &Name, x: f32, y: f32) -> Self {
        Self {
            name: Some(Name::boxed_copy(name)),
            x,
            y,
        }
    }

    /// The owned name, if any.
    pub fn name(&self) -> Option<&Name> {
        self.name.as_deref()
    }

    /// The owned name, or [`LifecycleError::EmptyName`].
    pub fn try_name(&self) -> Result<&Name> {
        self.name().ok_or(LifecycleError::EmptyName)
    }

    /// Address of the owned name, for identity comparisons.
    pub fn name_ptr(&self) -> Option<*const Name> {
        self.name().map(|name| name as *const Name)
    }

    /// Whether this vector owns no name.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
    }

    /// Move out of `self`, leaving it empty with zeroed components.
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Release the current name and take over `source`'s, leaving
    /// `source` empty.
    pub fn move_assign(&mut self, source: &mut Self) {
        self.name = None;
        *self = source.take();
    }
}

impl Clone for NamedVector {
    fn clone(&self) -> Self {
        Self {
            name: self.name().map(Name::boxed_copy),
            x: self.x,
            y: self.y,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        // Old name is gone before the copy is allocated.
        self.name = None;
        self.name = source.name().map(Name::boxed_copy);
        self.x = source.x;
        self.y = source.y;
    }
}
