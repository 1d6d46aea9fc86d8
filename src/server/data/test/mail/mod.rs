use crate::server::{
    data::mail::MailRepository,
    model::{item::RewardItem, mail::RewardMail},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, fixture::catalog as fixture};

mod create;
mod find_owned;
mod mark_received;
