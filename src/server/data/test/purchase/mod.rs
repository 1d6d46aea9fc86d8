use crate::server::data::purchase::PurchaseRepository;
use entity::prelude::*;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, fixture::catalog as fixture};

mod create;
