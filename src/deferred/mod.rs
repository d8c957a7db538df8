//! Deferred Module
//!
//! Wraps a synchronous store so every operation returns a completion that
//! composes with other asynchronous work.

mod adapter;

pub use adapter::DeferredStore;
