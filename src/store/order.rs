//! Insertion Order Module
//!
//! Tracks the order in which keys were first inserted, for FIFO eviction.

use std::collections::VecDeque;

// == Insertion Order ==
/// Queue of keys in insertion order.
///
/// Every insertion is stamped with a sequence number. Removing a key from
/// the store does not touch the queue; the stale slot stays behind and is
/// recognised later because its stamp no longer matches the live entry.
/// - Front = oldest insertion
/// - Back = newest insertion
#[derive(Debug)]
pub struct InsertionOrder<K> {
    /// Stamped keys, oldest first
    order: VecDeque<(u64, K)>,
    /// Stamp handed to the next insertion
    next_seq: u64,
}

impl<K> InsertionOrder<K> {
    // == Constructor ==
    /// Creates a new empty tracker.
    pub fn new() -> Self {
        Self {
            order: VecDeque::new(),
            next_seq: 0,
        }
    }

    // == Record ==
    /// Appends a key as the newest insertion and returns its stamp.
    pub fn record(&mut self, key: K) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.order.push_back((seq, key));
        seq
    }

    // == Pop Oldest ==
    /// Removes and returns the oldest slot, live or stale.
    pub fn pop_oldest(&mut self) -> Option<(u64, K)> {
        self.order.pop_front()
    }

    // == Peek Oldest ==
    #[cfg(test)]
    pub fn peek_oldest(&self) -> Option<&(u64, K)> {
        self.order.front()
    }

    // == Iterate ==
    /// Iterates slots oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &(u64, K)> {
        self.order.iter()
    }

    // == Retain ==
    /// Drops every slot for which `keep` returns false, preserving order.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(u64, &K) -> bool,
    {
        self.order.retain(|(seq, key)| keep(*seq, key));
    }

    // == Clear ==
    /// Forgets every slot. Stamps keep increasing so old stamps are never reused.
    pub fn clear(&mut self) {
        self.order.clear();
    }

    // == Length ==
    /// Returns the number of slots, stale ones included.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    // == Is Empty ==
    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl<K> Default for InsertionOrder<K> {
    fn default() -> Self {
        Self::new()
    }
}
