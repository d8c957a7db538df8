//! Error types for the capped store
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Store Error Enum ==
/// Unified error type for the capped store.
///
/// Missing keys are not errors; lookups report them as `None`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Capacity must hold at least one entry
    #[error("Invalid capacity: {0} (a store must hold at least one entry)")]
    InvalidCapacity(usize),
}

// == Result Type Alias ==
/// Convenience Result type for the capped store.
pub type Result<T> = std::result::Result<T, StoreError>;
