//! Stagekeeper Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the game
//! backend. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and customizable table schemas, entity factories, and a reference
//! catalog fixture.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **factory**: Inserts accounts, items, mail and clear records with sensible defaults
//! - **fixture**: In-memory data (the sample master data catalog) with no database access
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_account_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_account_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let account = factory::create_account(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
