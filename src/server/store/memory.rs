//! In-process ephemeral store.
//!
//! Entries live in a `HashMap` behind a `tokio::sync::RwLock`. Expiry is checked lazily
//! on access, so an expired entry is indistinguishable from an absent one.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::server::{error::store::StoreError, store::EphemeralStore};

#[derive(Clone)]
struct Entry {
    value: String,
    /// `None` never expires.
    expires_at: Option<Instant>,
}

impl Entry {
    fn new(value: String, ttl: Option<Duration>) -> Self {
        Self {
            value,
            expires_at: ttl.map(|ttl| Instant::now() + ttl),
        }
    }

    fn is_expired(&self) -> bool {
        self.expires_at
            .is_some_and(|expires_at| Instant::now() >= expires_at)
    }
}

/// Process-local `EphemeralStore`.
///
/// Cloning shares the same underlying map.
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, Entry>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes every expired entry.
    ///
    /// Lookups already ignore expired entries; this only reclaims memory.
    pub async fn purge_expired(&self) -> usize {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired());
        before - entries.len()
    }
}

#[async_trait]
impl EphemeralStore for MemoryStore {
    async fn set_nx(&self, key: &str, value: String, ttl: Duration) -> Result<bool, StoreError> {
        let mut entries = self.entries.write().await;

        if entries.get(key).is_some_and(|entry| !entry.is_expired()) {
            return Ok(false);
        }

        entries.insert(key.to_string(), Entry::new(value, Some(ttl)));
        Ok(true)
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self.entries.read().await;

        Ok(entries
            .get(key)
            .filter(|entry| !entry.is_expired())
            .map(|entry| entry.value.clone()))
    }

    async fn set(&self, key: &str, value: String, ttl: Option<Duration>) -> Result<(), StoreError> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), Entry::new(value, ttl));
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool, StoreError> {
        let removed = self.entries.write().await.remove(key);

        Ok(removed.is_some_and(|entry| !entry.is_expired()))
    }
}
