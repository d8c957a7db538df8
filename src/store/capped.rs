//! Capped Store Module
//!
//! Main store engine combining HashMap storage with insertion-order tracking
//! and FIFO eviction.

use std::collections::HashMap;
use std::hash::Hash;

use tracing::{debug, info, trace, warn};

use crate::config::StoreConfig;
use crate::contract::KeyValueStore;
use crate::error::{Result, StoreError};
use crate::store::{InsertionOrder, StoreStats};

/// Stale order slots tolerated on top of the live entry count before compaction.
const COMPACT_SLACK: usize = 32;

// == Slot ==
/// A stored value and the stamp of the insertion that created its key.
#[derive(Debug)]
struct Slot<V> {
    value: V,
    seq: u64,
}

// == Capped Store ==
/// Key-value store holding at most `capacity` entries.
///
/// When a new key arrives at a full store, the entry whose key was inserted
/// first is evicted. Updating an existing key keeps its place in line, and
/// reads never affect eviction order.
#[derive(Debug)]
pub struct CappedStore<K, V> {
    /// Key-value storage
    entries: HashMap<K, Slot<V>>,
    /// Insertion order tracker
    order: InsertionOrder<K>,
    /// Activity counters
    stats: StoreStats,
    /// Maximum number of entries allowed
    capacity: usize,
}

impl<K, V> CappedStore<K, V>
where
    K: Hash + Eq + Clone,
{
    // == Constructor ==
    /// Creates an empty store holding at most `capacity` entries.
    ///
    /// # Errors
    /// Returns [`StoreError::InvalidCapacity`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        validate_capacity(capacity)?;
        info!(capacity, "Capped store created");

        Ok(Self {
            entries: HashMap::new(),
            order: InsertionOrder::new(),
            stats: StoreStats::new(capacity),
            capacity,
        })
    }

    /// Creates an empty store sized from configuration.
    pub fn from_config(config: &StoreConfig) -> Result<Self> {
        Self::new(config.capacity)
    }

    // == Stats ==
    /// Returns current store statistics.
    pub fn stats(&self) -> StoreStats {
        let mut stats = self.stats.clone();
        stats.entries = self.entries.len();
        stats.capacity = self.capacity;
        stats
    }

    // == Iterate ==
    /// Borrowing iterator over entries, oldest insertion first.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.order.iter().filter_map(move |(seq, key)| {
            let slot = self.entries.get(key)?;
            (slot.seq == *seq).then_some((key, &slot.value))
        })
    }

    // == Eviction ==
    /// Evicts oldest entries until at most `limit` remain.
    ///
    /// Returns the number of entries evicted.
    fn evict_until(&mut self, limit: usize) -> usize {
        let mut evicted = 0;

        while self.entries.len() > limit {
            let Some((seq, key)) = self.order.pop_oldest() else {
                break;
            };

            // Slots left behind by forget/pull no longer match a live entry
            if self.entries.get(&key).is_some_and(|slot| slot.seq == seq) {
                self.entries.remove(&key);
                self.stats.record_eviction();
                evicted += 1;
            }
        }

        evicted
    }

    // == Remove ==
    fn remove_entry(&mut self, key: &K) -> Option<V> {
        let slot = self.entries.remove(key)?;
        self.stats.record_removals(1);
        self.compact_if_sparse();
        Some(slot.value)
    }

    // == Compaction ==
    /// Drops stale order slots once they outnumber live entries.
    fn compact_if_sparse(&mut self) {
        let live = self.entries.len();
        if self.order.len() <= live * 2 + COMPACT_SLACK {
            return;
        }

        let before = self.order.len();
        let entries = &self.entries;
        self.order
            .retain(|seq, key| entries.get(key).is_some_and(|slot| slot.seq == seq));
        trace!(before, after = self.order.len(), "Compacted insertion order");
    }
}

impl<K, V> KeyValueStore for CappedStore<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    type Key = K;
    type Value = V;

    fn all(&self) -> Vec<(K, V)> {
        self.iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    fn keys(&self) -> Vec<K> {
        self.iter().map(|(key, _)| key.clone()).collect()
    }

    fn values(&self) -> Vec<V> {
        self.iter().map(|(_, value)| value.clone()).collect()
    }

    fn get(&self, key: &K) -> Option<V> {
        self.entries.get(key).map(|slot| slot.value.clone())
    }

    fn pull(&mut self, key: &K) -> Option<V> {
        self.remove_entry(key)
    }

    // == Put ==
    /// Stores a key-value pair.
    ///
    /// An existing key is updated in place. A new key arriving at a full
    /// store evicts the oldest entry first.
    fn put(&mut self, key: K, value: V) -> bool {
        if let Some(slot) = self.entries.get_mut(&key) {
            slot.value = value;
            self.stats.record_update();
            return true;
        }

        // capacity is never zero, so there is always room for this key
        let evicted = self.evict_until(self.capacity - 1);
        if evicted > 0 {
            debug!(evicted, capacity = self.capacity, "Evicted oldest entry on put");
        }

        let seq = self.order.record(key.clone());
        self.entries.insert(key, Slot { value, seq });
        self.stats.record_insertion();

        true
    }

    fn has(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    fn forget(&mut self, key: &K) -> bool {
        self.remove_entry(key).is_some()
    }

    fn flush(&mut self) -> bool {
        let removed = self.entries.len();
        self.entries.clear();
        self.order.clear();
        self.stats.record_removals(removed);

        self.entries.is_empty()
    }

    fn count(&self) -> usize {
        self.entries.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    // == Resize ==
    /// Changes the capacity, evicting oldest entries when shrinking below
    /// the current size.
    fn resize(&mut self, capacity: usize) -> Result<()> {
        validate_capacity(capacity)?;

        let previous = self.capacity;
        self.capacity = capacity;
        let evicted = self.evict_until(capacity);

        debug!(previous, capacity, evicted, "Capped store resized");
        Ok(())
    }
}

fn validate_capacity(capacity: usize) -> Result<()> {
    if capacity == 0 {
        warn!("Rejected zero capacity for capped store");
        return Err(StoreError::InvalidCapacity(capacity));
    }
    Ok(())
}
