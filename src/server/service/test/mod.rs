use std::time::Duration;

use chrono::{TimeZone, Utc};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{
    builder::TestBuilder,
    factory,
    fixture::catalog::{self as fixture, catalog_json},
};

use crate::server::{
    catalog::Catalog,
    data::{
        account::AccountRepository, clear_record::ClearRecordRepository, item::ItemRepository,
        mail::MailRepository,
    },
    error::{
        account::AccountError, attendance::AttendanceError, enhance::EnhanceError,
        mail::MailError, purchase::PurchaseError, run::RunError, settlement::SettlementError,
        AppError,
    },
    model::{
        dungeon::{ClearRecord, RecordUpdate},
        item::RewardItem,
        mail::RewardMail,
    },
    service::{
        account::AccountService, attendance::AttendanceService, dungeon::DungeonService,
        enhance::EnhanceService, mail::MailService, purchase::PurchaseService,
        settlement::SettlementService,
    },
    store::{stub::DeleteFailingStore, MemoryStore},
};

mod account;

const RUN_TTL: Duration = Duration::from_secs(60);

fn catalog() -> Catalog {
    Catalog::from_value(catalog_json()).unwrap()
}
