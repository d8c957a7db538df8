//! Capped Store - An in-memory key-value store with a hard entry limit
//!
//! Holds at most `capacity` entries and evicts the oldest inserted entry
//! (FIFO) when a new key would exceed that limit. Available as a synchronous
//! store and as a deferred adapter whose operations return completions.

pub mod config;
pub mod contract;
pub mod deferred;
pub mod error;
pub mod store;

pub use config::StoreConfig;
pub use contract::{Completion, DeferredKeyValueStore, KeyValueStore};
pub use deferred::DeferredStore;
pub use error::{Result, StoreError};
pub use store::{CappedStore, StoreStats};
