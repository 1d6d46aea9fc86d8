//! account_item entity
//! Owned item instances. Stackable items share one row per code, equipment gets a row per unit.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "account_item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub account_id: i64,
    pub item_code: i64,
    pub count: i64,
    pub enhance_level: i32,
    pub attack: i64,
    pub defence: i64,
    pub magic: i64,
    pub destroyed: bool,
    pub obtained_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::account_progress::Entity",
        from = "Column::AccountId",
        to = "super::account_progress::Column::AccountId",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    AccountProgress,
}

impl Related<super::account_progress::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AccountProgress.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
