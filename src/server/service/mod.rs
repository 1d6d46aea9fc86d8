//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They implement the game
//! rules, coordinate the durable store with the ephemeral run state and own the
//! transaction boundaries: every multi-step durable mutation begins a transaction,
//! hands it to generic repositories and commits only once every step succeeded.

pub mod account;
pub mod attendance;
pub mod dungeon;
pub mod enhance;
pub mod inventory;
pub mod lock;
pub mod mail;
pub mod purchase;
pub mod settlement;

#[cfg(test)]
mod test;
