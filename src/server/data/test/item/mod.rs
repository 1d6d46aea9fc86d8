use crate::server::{catalog::Catalog, data::item::ItemRepository};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory,
    fixture::catalog::{self as fixture, catalog_json},
};

mod add_to_stack;
mod destroy;
mod find_owned;
mod insert_unit;

fn catalog() -> Catalog {
    Catalog::from_value(catalog_json()).unwrap()
}
