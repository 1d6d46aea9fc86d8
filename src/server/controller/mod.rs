//! HTTP request handlers.
//!
//! Controllers read the account id and the JSON body, call one service operation and
//! convert its domain result into a DTO. Every route runs behind the request lock
//! middleware, so a handler never overlaps another request of the same account.

pub mod account;
pub mod attendance;
pub mod dungeon;
pub mod item;
pub mod mail;
pub mod purchase;
