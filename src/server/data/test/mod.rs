mod account;
mod attendance;
mod clear_record;
mod item;
mod mail;
mod purchase;
mod run_state;
