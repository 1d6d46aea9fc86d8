//! Data access layer.
//!
//! Repositories over the durable database (SeaORM) and the ephemeral store. Durable
//! repositories are generic over `ConnectionTrait` so the same code runs on a pooled
//! connection or inside a transaction opened by a service. Repositories return entity
//! models or domain models; they never apply game rules.

pub mod account;
pub mod attendance;
pub mod clear_record;
pub mod item;
pub mod mail;
pub mod purchase;
pub mod run_state;

#[cfg(test)]
mod test;
