//! Store Module
//!
//! Provides the capped in-memory store with FIFO eviction.

mod capped;
mod order;
mod stats;


// Re-export public types
pub use capped::CappedStore;
pub(crate) use order::InsertionOrder;
pub use stats::StoreStats;
