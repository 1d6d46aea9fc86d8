//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Pure game rules that operate on them
//! (leveling, clear record improvement, attendance streaks, enhancement) live here too so
//! they can be tested without a database.

pub mod account;
pub mod attendance;
pub mod dungeon;
pub mod item;
pub mod mail;
