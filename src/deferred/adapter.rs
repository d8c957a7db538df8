//! Deferred Store Adapter
//!
//! Forwards every call to an inner synchronous store. The inner call runs
//! before the completion is returned, so calls take effect in the order they
//! are issued whether or not their completions are ever awaited.

use std::hash::Hash;

use futures::future::ready;

use crate::config::StoreConfig;
use crate::contract::{Completion, DeferredKeyValueStore, KeyValueStore};
use crate::error::Result;
use crate::store::{CappedStore, StoreStats};

// == Deferred Store ==
/// Deferred form of a [`KeyValueStore`].
#[derive(Debug)]
pub struct DeferredStore<S> {
    inner: S,
}

impl<K, V> DeferredStore<CappedStore<K, V>>
where
    K: Hash + Eq + Clone,
{
    // == Constructor ==
    /// Creates a deferred capped store holding at most `capacity` entries.
    ///
    /// # Errors
    /// Returns [`crate::StoreError::InvalidCapacity`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        CappedStore::new(capacity).map(Self::from_store)
    }

    /// Creates a deferred capped store sized from configuration.
    pub fn from_config(config: &StoreConfig) -> Result<Self> {
        CappedStore::from_config(config).map(Self::from_store)
    }

    /// Returns current statistics of the inner store.
    pub fn stats(&self) -> StoreStats {
        self.inner.stats()
    }
}

impl<S> DeferredStore<S> {
    /// Wraps an existing store.
    pub fn from_store(inner: S) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S> DeferredKeyValueStore for DeferredStore<S>
where
    S: KeyValueStore,
{
    type Key = S::Key;
    type Value = S::Value;

    fn all(&self) -> Completion<Vec<(S::Key, S::Value)>> {
        ready(self.inner.all())
    }

    fn keys(&self) -> Completion<Vec<S::Key>> {
        ready(self.inner.keys())
    }

    fn values(&self) -> Completion<Vec<S::Value>> {
        ready(self.inner.values())
    }

    fn get(&self, key: &S::Key) -> Completion<Option<S::Value>> {
        ready(self.inner.get(key))
    }

    fn get_many(&self, keys: &[S::Key]) -> Completion<Vec<Option<S::Value>>> {
        ready(self.inner.get_many(keys))
    }

    fn pull(&mut self, key: &S::Key) -> Completion<Option<S::Value>> {
        ready(self.inner.pull(key))
    }

    fn pull_many(&mut self, keys: &[S::Key]) -> Completion<Vec<Option<S::Value>>> {
        ready(self.inner.pull_many(keys))
    }

    fn put(&mut self, key: S::Key, value: S::Value) -> Completion<bool> {
        ready(self.inner.put(key, value))
    }

    fn put_many(&mut self, entries: Vec<(S::Key, S::Value)>) -> Completion<Vec<bool>> {
        ready(self.inner.put_many(entries))
    }

    fn has(&self, key: &S::Key) -> Completion<bool> {
        ready(self.inner.has(key))
    }

    fn has_many(&self, keys: &[S::Key]) -> Completion<Vec<bool>> {
        ready(self.inner.has_many(keys))
    }

    fn missing(&self, key: &S::Key) -> Completion<bool> {
        ready(self.inner.missing(key))
    }

    fn missing_many(&self, keys: &[S::Key]) -> Completion<Vec<bool>> {
        ready(self.inner.missing_many(keys))
    }

    fn forget(&mut self, key: &S::Key) -> Completion<bool> {
        ready(self.inner.forget(key))
    }

    fn forget_many(&mut self, keys: &[S::Key]) -> Completion<Vec<bool>> {
        ready(self.inner.forget_many(keys))
    }

    fn flush(&mut self) -> Completion<bool> {
        ready(self.inner.flush())
    }

    fn count(&self) -> Completion<usize> {
        ready(self.inner.count())
    }

    fn is_empty(&self) -> Completion<bool> {
        ready(self.inner.is_empty())
    }

    fn is_not_empty(&self) -> Completion<bool> {
        ready(self.inner.is_not_empty())
    }

    fn capacity(&self) -> Completion<usize> {
        ready(self.inner.capacity())
    }

    fn resize(&mut self, capacity: usize) -> Completion<Result<()>> {
        ready(self.inner.resize(capacity))
    }
}
