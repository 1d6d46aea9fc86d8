//! Request middleware: account identity and the per-account request lock.

pub mod auth;
pub mod lock;
