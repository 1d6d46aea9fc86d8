//! Ephemeral key/value store.
//!
//! Holds short-lived state that must not touch the durable database: account request
//! locks and in-progress dungeon runs. The server depends only on the `EphemeralStore`
//! trait; `MemoryStore` is the process-local implementation it ships with.

pub mod memory;

#[cfg(test)]
pub mod stub;

use std::time::Duration;

use async_trait::async_trait;

use crate::server::error::store::StoreError;

pub use memory::MemoryStore;

/// Atomic key/value operations with per-key expiry.
///
/// Every operation can fail with `StoreError::Unavailable` when the backing store cannot
/// be reached. Expired keys behave exactly like absent keys.
#[async_trait]
pub trait EphemeralStore: Send + Sync {
    /// Sets `key` to `value` only if it is absent, expiring after `ttl`.
    ///
    /// # Returns
    /// - `Ok(true)` - Key was created
    /// - `Ok(false)` - Key already existed, nothing written
    /// - `Err(StoreError)` - Store unreachable
    async fn set_nx(&self, key: &str, value: String, ttl: Duration) -> Result<bool, StoreError>;

    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Sets `key` unconditionally. `None` keeps the key until deleted.
    async fn set(&self, key: &str, value: String, ttl: Option<Duration>) -> Result<(), StoreError>;

    /// Deletes `key`.
    ///
    /// # Returns
    /// - `Ok(true)` - Key existed and was removed
    /// - `Ok(false)` - Key was absent
    async fn delete(&self, key: &str) -> Result<bool, StoreError>;
}
