use crate::server::data::attendance::AttendanceRepository;
use chrono::Utc;
use entity::prelude::*;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod record;
