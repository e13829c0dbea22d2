//! # In-Memory Key-Value Backend
//!
//! A [`KeyValueStore`] backed by a plain `HashMap`. Not durable across
//! process restarts; its job is to make tests fast and to let them inject
//! write failures on demand.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::{KvError, KvResult};
use crate::store::KeyValueStore;

/// In-memory key-value store.
///
/// Clones share the same map, so a test can hand one handle to the store
/// under test and keep another to inspect or corrupt the stored payload.
#[derive(Debug, Clone, Default)]
pub struct MemoryKv {
    entries: Arc<Mutex<HashMap<String, String>>>,
    fail_writes: Arc<AtomicBool>,
}

impl MemoryKv {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        MemoryKv::default()
    }

    /// Makes every subsequent `set` fail with a query error.
    ///
    /// Lets tests exercise the persist-failure policy: the in-memory cart
    /// keeps the mutation while the write error is surfaced.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.entries.lock().expect("kv map poisoned").len()
    }

    /// Checks if the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl KeyValueStore for MemoryKv {
    async fn get(&self, key: &str) -> KvResult<Option<String>> {
        Ok(self.entries.lock().expect("kv map poisoned").get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> KvResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(KvError::QueryFailed("simulated write failure".to_string()));
        }

        self.entries
            .lock()
            .expect("kv map poisoned")
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
