//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. The catalog fixture
//! is the master data every service test runs against; its codes are exposed as
//! constants so assertions don't repeat magic numbers.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture::catalog;
//!
//! let source = catalog::catalog_json();
//! let catalog = Catalog::from_value(source)?;
//! assert!(catalog.stage(catalog::STAGE_ONE).is_some());
//! ```

pub mod catalog;
