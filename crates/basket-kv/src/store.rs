//! # KeyValueStore Trait
//!
//! The seam between the cart state container and its storage backend.
//!
//! Payloads are opaque here: this layer moves strings in and out of durable
//! storage and never interprets them. Serialization lives with the caller.

use async_trait::async_trait;

use crate::error::KvResult;

/// Durable key-value storage addressed by string keys.
///
/// ## Contract
/// - `get` of a key never written returns `Ok(None)`.
/// - `set` overwrites any previous value for the key.
/// - Values survive process restarts (the in-memory test double relaxes this).
///
/// ## Object Safety
/// The trait is object-safe (via `async_trait`) so consumers can hold a
/// `Box<dyn KeyValueStore>` when the backend is decided at runtime; the
/// store itself is generic and pays no boxing cost.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`, if any.
    async fn get(&self, key: &str) -> KvResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> KvResult<()>;
}
