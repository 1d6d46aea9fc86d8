//! Application state shared across all request handlers.
//!
//! Initialized once during startup and cloned into each handler through Axum's state
//! extraction. Every field is cheap to clone: the database connection is a pool, the
//! catalog and the store are reference counted and the request lock shares its store.

use std::{sync::Arc, time::Duration};

use sea_orm::DatabaseConnection;

use crate::server::{catalog::Catalog, service::lock::RequestLock, store::EphemeralStore};

#[derive(Clone)]
pub struct AppState {
    /// Durable store connection pool.
    pub db: DatabaseConnection,

    /// Master data loaded at startup, read-only afterwards.
    pub catalog: Arc<Catalog>,

    /// Ephemeral store holding dungeon run state and account locks.
    pub store: Arc<dyn EphemeralStore>,

    /// Per-account request lock, applied to every route by the lock middleware.
    pub lock: RequestLock,

    /// Lifetime of an abandoned dungeon run.
    pub run_ttl: Duration,
}

impl AppState {
    /// Creates the state; the request lock shares `store`.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `catalog` - Validated master data
    /// - `store` - Ephemeral store backend
    /// - `lock_ttl` - Expiry of an account lock whose holder never released it
    /// - `run_ttl` - Expiry of an abandoned dungeon run
    pub fn new(
        db: DatabaseConnection,
        catalog: Catalog,
        store: Arc<dyn EphemeralStore>,
        lock_ttl: Duration,
        run_ttl: Duration,
    ) -> Self {
        Self {
            db,
            catalog: Arc::new(catalog),
            lock: RequestLock::new(Arc::clone(&store), lock_ttl),
            store,
            run_ttl,
        }
    }
}
