use crate::server::data::account::AccountRepository;
use entity::prelude::*;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod add_money;
mod create;
mod set_level;
