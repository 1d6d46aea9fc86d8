//! Per-account request lock.
//!
//! Serializes every mutating request of one account. The lock is a key created with an
//! atomic set-if-absent and a short TTL; if the holder crashes, the TTL frees the account.
//! A second request arriving while the key exists is rejected rather than queued.

use std::sync::Arc;
use std::time::Duration;

use crate::server::{error::lock::LockError, store::EphemeralStore};

/// Builds the lock key for an account.
pub fn lock_key(account_id: i64) -> String {
    format!("lock:{}", account_id)
}

/// Mutual exclusion keyed by account id.
///
/// Cheap to clone; clones share the same store.
#[derive(Clone)]
pub struct RequestLock {
    store: Arc<dyn EphemeralStore>,
    ttl: Duration,
}

impl RequestLock {
    /// Creates a lock backed by `store` whose keys expire after `ttl`.
    pub fn new(store: Arc<dyn EphemeralStore>, ttl: Duration) -> Self {
        Self { store, ttl }
    }

    /// Acquires the lock for `account_id`.
    ///
    /// Fails closed: an unreachable store is reported as an error, never as acquired.
    ///
    /// # Returns
    /// - `Ok(LockGuard)` - Lock held until the guard is released or dropped
    /// - `Err(LockError::AlreadyLocked)` - Another request holds the lock
    /// - `Err(LockError::StoreUnavailable)` - Store unreachable
    pub async fn acquire(&self, account_id: i64) -> Result<LockGuard, LockError> {
        let acquired = self
            .store
            .set_nx(&lock_key(account_id), "1".to_string(), self.ttl)
            .await
            .map_err(|err| {
                tracing::error!(account_id, "Failed to reach store for account lock: {}", err);
                LockError::StoreUnavailable(err)
            })?;

        if !acquired {
            tracing::warn!(account_id, "Rejected request, account lock already held");
            return Err(LockError::AlreadyLocked(account_id));
        }

        Ok(LockGuard {
            store: Arc::clone(&self.store),
            account_id,
            released: false,
        })
    }

    /// Attempts to acquire without a guard.
    ///
    /// # Returns
    /// - `true` - Lock acquired, caller must call `release`
    /// - `false` - Lock held elsewhere or store unreachable
    pub async fn try_acquire(&self, account_id: i64) -> bool {
        match self.acquire(account_id).await {
            Ok(mut guard) => {
                guard.released = true;
                true
            }
            Err(_) => false,
        }
    }

    /// Deletes the lock key unconditionally.
    pub async fn release(&self, account_id: i64) {
        release_key(self.store.as_ref(), account_id).await;
    }
}

async fn release_key(store: &dyn EphemeralStore, account_id: i64) {
    if let Err(err) = store.delete(&lock_key(account_id)).await {
        // TTL frees the account eventually
        tracing::error!(account_id, "Failed to release account lock: {}", err);
    }
}

/// Scoped ownership of an account lock.
///
/// Call `release` on every exit path. If the guard is dropped without it (a panic in the
/// guarded handler), the release is spawned onto the current runtime.
pub struct LockGuard {
    store: Arc<dyn EphemeralStore>,
    account_id: i64,
    released: bool,
}

impl LockGuard {
    pub fn account_id(&self) -> i64 {
        self.account_id
    }

    pub async fn release(mut self) {
        self.released = true;
        release_key(self.store.as_ref(), self.account_id).await;
    }
}

impl Drop for LockGuard {
    fn drop(&mut self) {
        if self.released {
            return;
        }

        let store = Arc::clone(&self.store);
        let account_id = self.account_id;
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    release_key(store.as_ref(), account_id).await;
                });
            }
            Err(_) => {
                tracing::warn!(account_id, "Account lock dropped outside runtime, left to expire");
            }
        }
    }
}
