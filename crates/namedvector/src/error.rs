//! Error types for lifecycle bookkeeping

use thiserror::Error;

/// Main error type for namedvector operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LifecycleError {
    /// A pointer-owning composite was asked for its name but owns none
    /// (default-constructed or moved-from)
    #[error("Empty name: the named vector owns no name")]
    EmptyName,

    /// A counter did not return to zero at teardown
    #[error("Live instances: counter '{label}' has {live} live instance(s), expected 0")]
    LiveInstances {
        /// Label of the offending counter
        label: String,
        /// Live count observed at teardown
        live: isize,
    },
}

/// Result type alias for namedvector operations
pub type Result<T> = std::result::Result<T, LifecycleError>;
