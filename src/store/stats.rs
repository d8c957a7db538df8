//! Store Statistics Module
//!
//! Tracks write-side activity: insertions, updates, removals and evictions.

use serde::Serialize;

// == Store Stats ==
/// Snapshot of store activity counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    /// Number of new keys added
    pub insertions: u64,
    /// Number of in-place value replacements for existing keys
    pub updates: u64,
    /// Number of entries removed by forget, pull or flush
    pub removals: u64,
    /// Number of entries evicted by capacity pressure
    pub evictions: u64,
    /// Current number of entries in the store
    pub entries: usize,
    /// Current maximum number of entries
    pub capacity: usize,
}

impl StoreStats {
    // == Constructor ==
    /// Creates a new StoreStats with all counters at zero.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    // == Eviction Rate ==
    /// Share of inserted keys that were later evicted.
    ///
    /// Returns 0.0 if nothing has been inserted.
    pub fn eviction_rate(&self) -> f64 {
        if self.insertions == 0 {
            0.0
        } else {
            self.evictions as f64 / self.insertions as f64
        }
    }

    pub fn record_insertion(&mut self) {
        self.insertions += 1;
    }

    pub fn record_update(&mut self) {
        self.updates += 1;
    }

    pub fn record_removals(&mut self, count: usize) {
        self.removals += count as u64;
    }

    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }
}
