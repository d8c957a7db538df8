//! Configuration Module
//!
//! Plain configuration values for building a store.

/// Default number of entries a store holds when nothing is configured.
pub const DEFAULT_CAPACITY: usize = 1000;

/// Store configuration parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Maximum number of entries the store can hold
    pub capacity: usize,
}

impl StoreConfig {
    /// Creates a config with an explicit capacity.
    ///
    /// The value is validated when a store is built from it, not here.
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}
