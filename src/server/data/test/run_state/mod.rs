use std::time::Duration;

use crate::server::{
    catalog::Catalog,
    data::run_state::{enemies_key, items_key, RunStateRepository},
    error::run::RunError,
    model::item::RewardItem,
    store::{
        stub::{DeleteFailingStore, FlakyStore, UnavailableStore},
        EphemeralStore, MemoryStore,
    },
};
use test_utils::fixture::catalog::{self as fixture, catalog_json};

mod claim;
mod end;
mod record;
mod start;
mod validate_clear;

const RUN_TTL: Duration = Duration::from_secs(60);

fn catalog() -> Catalog {
    Catalog::from_value(catalog_json()).unwrap()
}
