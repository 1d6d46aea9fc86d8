use crate::server::data::clear_record::ClearRecordRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_by_account;
mod insert;
mod update;
