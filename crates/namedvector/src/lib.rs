//! # namedvector
//!
//! Instance-counted values and the composites that own them.
//!
//! A [`Name`] registers every construction and drop with a
//! [`LiveCounter`]. Two composites hold a name in different ways and must
//! keep that count honest through copies, moves and drops:
//!
//! - **[`NamedVector`]**: owns its name through a heap allocation that is
//!   deep-copied on clone and handed over on move.
//! - **[`NamedVectorValue`]**: embeds its name by value and inherits its
//!   behaviour.
//!
//! [`CounterGuard`] is the fixture that zeroes a counter at setup and
//! checks it is back at zero at teardown. [`Traced`] records every
//! lifecycle event of a wrapped value for inspection.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod context;
pub mod counter;
pub mod error;
pub mod fixture;
pub mod name;
pub mod named_vector;
pub mod named_vector_value;
pub mod traced;

// Re-export main types
pub use context::TrackingContext;
pub use counter::{CounterSnapshot, LiveCounter};
pub use error::{LifecycleError, Result};
pub use fixture::CounterGuard;
pub use name::Name;
pub use named_vector::NamedVector;
pub use named_vector_value::NamedVectorValue;
pub use traced::{EventKind, EventLog, LifecycleEvent, Traced};

/// namedvector version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
