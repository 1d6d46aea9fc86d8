//! SeaORM entities for every durable table of the game backend.

pub mod prelude;

pub mod account_item;
pub mod account_progress;
pub mod attendance;
pub mod clear_record;
pub mod mail;
pub mod mail_item;
pub mod purchase_receipt;
