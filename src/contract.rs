//! Store Contract
//!
//! The operations every capped store exposes, in a synchronous and a deferred
//! flavour. Batch forms are applied strictly left to right, one key at a time,
//! so an earlier item can affect a later one (a `put` may evict a key that a
//! later item in the same batch reads).

use futures::future::Ready;

use crate::error::Result;

/// Handle returned by deferred operations.
///
/// The operation has already taken effect when the handle is returned; the
/// handle only carries its result and is ready on first poll.
pub type Completion<T> = Ready<T>;

// == Synchronous Contract ==
/// Synchronous key-value store operations.
pub trait KeyValueStore {
    /// Key type
    type Key;
    /// Value type
    type Value;

    /// Snapshot of every entry in insertion order.
    fn all(&self) -> Vec<(Self::Key, Self::Value)>;

    /// Snapshot of every key in insertion order.
    fn keys(&self) -> Vec<Self::Key>;

    /// Snapshot of every value in insertion order.
    fn values(&self) -> Vec<Self::Value>;

    fn get(&self, key: &Self::Key) -> Option<Self::Value>;

    fn get_many(&self, keys: &[Self::Key]) -> Vec<Option<Self::Value>> {
        keys.iter().map(|key| self.get(key)).collect()
    }

    /// Removes `key` and returns the value it held.
    fn pull(&mut self, key: &Self::Key) -> Option<Self::Value>;

    /// Pulls each key in turn; a repeated key yields `None` the second time.
    fn pull_many(&mut self, keys: &[Self::Key]) -> Vec<Option<Self::Value>> {
        keys.iter().map(|key| self.pull(key)).collect()
    }

    /// Inserts or updates an entry, returning whether `key` is present afterwards.
    fn put(&mut self, key: Self::Key, value: Self::Value) -> bool;

    fn put_many(&mut self, entries: Vec<(Self::Key, Self::Value)>) -> Vec<bool> {
        entries
            .into_iter()
            .map(|(key, value)| self.put(key, value))
            .collect()
    }

    fn has(&self, key: &Self::Key) -> bool;

    fn has_many(&self, keys: &[Self::Key]) -> Vec<bool> {
        keys.iter().map(|key| self.has(key)).collect()
    }

    fn missing(&self, key: &Self::Key) -> bool {
        !self.has(key)
    }

    fn missing_many(&self, keys: &[Self::Key]) -> Vec<bool> {
        keys.iter().map(|key| self.missing(key)).collect()
    }

    /// Removes `key`, returning whether anything was removed.
    fn forget(&mut self, key: &Self::Key) -> bool;

    fn forget_many(&mut self, keys: &[Self::Key]) -> Vec<bool> {
        keys.iter().map(|key| self.forget(key)).collect()
    }

    /// Removes every entry, returning whether the store is now empty.
    fn flush(&mut self) -> bool;

    fn count(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.count() == 0
    }

    fn is_not_empty(&self) -> bool {
        !self.is_empty()
    }

    /// Maximum number of entries the store holds.
    fn capacity(&self) -> usize;

    /// Changes the capacity, evicting the oldest entries if the store no
    /// longer fits. Fails on zero and leaves the store untouched.
    fn resize(&mut self, capacity: usize) -> Result<()>;
}

// == Deferred Contract ==
/// The synchronous contract with every result delivered through a [`Completion`].
pub trait DeferredKeyValueStore {
    type Key;
    type Value;

    fn all(&self) -> Completion<Vec<(Self::Key, Self::Value)>>;
    fn keys(&self) -> Completion<Vec<Self::Key>>;
    fn values(&self) -> Completion<Vec<Self::Value>>;
    fn get(&self, key: &Self::Key) -> Completion<Option<Self::Value>>;
    fn get_many(&self, keys: &[Self::Key]) -> Completion<Vec<Option<Self::Value>>>;
    fn pull(&mut self, key: &Self::Key) -> Completion<Option<Self::Value>>;
    fn pull_many(&mut self, keys: &[Self::Key]) -> Completion<Vec<Option<Self::Value>>>;
    fn put(&mut self, key: Self::Key, value: Self::Value) -> Completion<bool>;
    fn put_many(&mut self, entries: Vec<(Self::Key, Self::Value)>) -> Completion<Vec<bool>>;
    fn has(&self, key: &Self::Key) -> Completion<bool>;
    fn has_many(&self, keys: &[Self::Key]) -> Completion<Vec<bool>>;
    fn missing(&self, key: &Self::Key) -> Completion<bool>;
    fn missing_many(&self, keys: &[Self::Key]) -> Completion<Vec<bool>>;
    fn forget(&mut self, key: &Self::Key) -> Completion<bool>;
    fn forget_many(&mut self, keys: &[Self::Key]) -> Completion<Vec<bool>>;
    fn flush(&mut self) -> Completion<bool>;
    fn count(&self) -> Completion<usize>;
    fn is_empty(&self) -> Completion<bool>;
    fn is_not_empty(&self) -> Completion<bool>;
    fn capacity(&self) -> Completion<usize>;
    fn resize(&mut self, capacity: usize) -> Completion<Result<()>>;
}
