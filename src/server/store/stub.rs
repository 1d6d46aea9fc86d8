//! Store doubles for exercising failure paths.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::server::{
    error::store::StoreError,
    store::{EphemeralStore, MemoryStore},
};

/// Store whose every operation fails as if the backend were unreachable.
pub struct UnavailableStore;

fn unavailable() -> StoreError {
    StoreError::Unavailable("connection refused".to_string())
}

#[async_trait]
impl EphemeralStore for UnavailableStore {
    async fn set_nx(&self, _: &str, _: String, _: Duration) -> Result<bool, StoreError> {
        Err(unavailable())
    }

    async fn get(&self, _: &str) -> Result<Option<String>, StoreError> {
        Err(unavailable())
    }

    async fn set(&self, _: &str, _: String, _: Option<Duration>) -> Result<(), StoreError> {
        Err(unavailable())
    }

    async fn delete(&self, _: &str) -> Result<bool, StoreError> {
        Err(unavailable())
    }
}

/// Memory store that starts failing writes after a number of successful ones.
///
/// Reads and deletes always succeed, so compensation paths can be observed.
pub struct FlakyStore {
    pub inner: MemoryStore,
    writes_left: AtomicUsize,
}

impl FlakyStore {
    pub fn failing_after(writes: usize) -> Self {
        Self {
            inner: MemoryStore::new(),
            writes_left: AtomicUsize::new(writes),
        }
    }

    fn take_write(&self) -> Result<(), StoreError> {
        self.writes_left
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| left.checked_sub(1))
            .map(|_| ())
            .map_err(|_| unavailable())
    }
}

#[async_trait]
impl EphemeralStore for FlakyStore {
    async fn set_nx(&self, key: &str, value: String, ttl: Duration) -> Result<bool, StoreError> {
        self.take_write()?;
        self.inner.set_nx(key, value, ttl).await
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: String, ttl: Option<Duration>) -> Result<(), StoreError> {
        self.take_write()?;
        self.inner.set(key, value, ttl).await
    }

    async fn delete(&self, key: &str) -> Result<bool, StoreError> {
        self.inner.delete(key).await
    }
}

/// Memory store whose deletes fail while switched on.
///
/// With a suffix set, only keys ending in it fail, so a half-completed removal can be
/// staged.
#[derive(Default)]
pub struct DeleteFailingStore {
    pub inner: MemoryStore,
    failing: AtomicBool,
    suffix: Option<&'static str>,
}

impl DeleteFailingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn only_keys_ending_with(suffix: &'static str) -> Self {
        Self {
            suffix: Some(suffix),
            ..Self::new()
        }
    }

    pub fn fail_deletes(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

#[async_trait]
impl EphemeralStore for DeleteFailingStore {
    async fn set_nx(&self, key: &str, value: String, ttl: Duration) -> Result<bool, StoreError> {
        self.inner.set_nx(key, value, ttl).await
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: String, ttl: Option<Duration>) -> Result<(), StoreError> {
        self.inner.set(key, value, ttl).await
    }

    async fn delete(&self, key: &str) -> Result<bool, StoreError> {
        let matches = self.suffix.is_none_or(|suffix| key.ends_with(suffix));
        if matches && self.failing.load(Ordering::SeqCst) {
            return Err(unavailable());
        }
        self.inner.delete(key).await
    }
}
