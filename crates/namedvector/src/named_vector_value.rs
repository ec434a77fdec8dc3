//! A 2D vector that embeds its name by value

use std::mem;

use crate::name::Name;

/// A named 2D vector holding its name inline.
///
/// Copy, assignment, move and drop all fall through to [`Name`]'s own
/// behaviour; the vector adds no ownership logic of its own.
#[derive(Debug, Default, PartialEq)]
pub struct NamedVectorValue {
    /// The embedded name
    pub name: Name,

    /// Horizontal component
    pub x: f32,

    /// Vertical component
    pub y: f32,
}

impl NamedVectorValue {
    /// Create a vector holding a copy of `name`.
    pub fn new(name: &Name, x: f32, y: f32) -> Self {
        Self {
            name: name.clone(),
            x,
            y,
        }
    }

    /// Move out of `self`, leaving an empty name and zeroed components
    /// behind.
    ///
    /// The left-behind name is registered with the same counter as the
    /// moved name and is itself a live instance.
    pub fn take(&mut self) -> Self {
        let left_behind = Self {
            name: Name::new_in(String::new(), self.name.counter()),
            x: 0.0,
            y: 0.0,
        };
        mem::replace(self, left_behind)
    }
}

impl Clone for NamedVectorValue {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            x: self.x,
            y: self.y,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.name.clone_from(&source.name);
        self.x = source.x;
        self.y = source.y;
    }
}
