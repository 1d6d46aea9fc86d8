//! account_progress entity
//! One row per account; every other per-account table references it.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "account_progress")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub account_id: i64,
    pub level: i32,
    pub exp: i64,
    pub money: i64,
    pub stages_cleared: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::account_item::Entity")]
    AccountItem,
    #[sea_orm(has_many = "super::clear_record::Entity")]
    ClearRecord,
    #[sea_orm(has_many = "super::mail::Entity")]
    Mail,
}

impl Related<super::account_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AccountItem.def()
    }
}

impl Related<super::clear_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClearRecord.def()
    }
}

impl Related<super::mail::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Mail.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
