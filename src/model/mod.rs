//! Wire DTOs exchanged with game clients.
//!
//! Request bodies and response payloads for every API route. These types carry no
//! behavior; controllers convert them to and from the server-side domain models.

pub mod account;
pub mod api;
pub mod attendance;
pub mod dungeon;
pub mod item;
pub mod mail;
pub mod purchase;
