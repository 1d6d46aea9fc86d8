//! Game backend server: dungeon runs, settlement, mail and account state.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Game rules, settlement and transaction boundaries
//! - **Data Layer** (`data/`) - Durable store repositories and the ephemeral run state
//! - **Model Layer** (`model/`) - Domain models and pure game rules
//! - **Error Layer** (`error/`) - Error types and HTTP response mapping with result codes
//! - **Middleware** (`middleware/`) - Account identity and the per-account request lock
//!
//! # Infrastructure
//!
//! - **Catalog** (`catalog/`) - Master data loaded once at startup, read-only afterwards
//! - **Store** (`store/`) - Ephemeral key-value store with set-if-absent and TTLs
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state
//! - **Startup** (`startup`) - Database connection and catalog loading
//! - **Scheduler** (`scheduler/`) - Cron jobs for store maintenance
//! - **Router** (`router`) - Axum route configuration
//!
//! # Request Flow
//!
//! 1. **Router** receives the request; the lock middleware reads the account id and
//!    acquires the account lock, rejecting the request if another one holds it
//! 2. **Controller** parses the body and calls one service operation
//! 3. **Service** applies the game rules, updating run state in the ephemeral store and
//!    committing durable changes in one transaction
//! 4. **Controller** converts the domain result to a DTO
//! 5. The middleware releases the lock once the response is produced

pub mod catalog;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod store;
