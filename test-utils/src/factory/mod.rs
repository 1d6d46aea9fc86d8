//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories for child rows take the owning account (or
//! mail) id, so create the account first.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let account = factory::create_account(&db).await?;
//!     let sword = factory::create_item(&db, account.account_id, 1, 1).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let account = factory::account::AccountFactory::new(&db)
//!     .level(3)
//!     .money(500)
//!     .build()
//!     .await?;
//! ```

pub mod account;
pub mod attendance;
pub mod clear_record;
pub mod helpers;
pub mod item;
pub mod mail;

pub use account::create_account;
pub use attendance::create_attendance;
pub use clear_record::create_clear_record;
pub use item::create_item;
pub use mail::{create_mail, create_mail_item};
