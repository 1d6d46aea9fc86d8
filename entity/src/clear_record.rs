//! clear_record entity
//! Best (rank, time) per account and stage.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "clear_record")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub account_id: i64,
    #[sea_orm(primary_key, auto_increment = false)]
    pub stage_code: i64,
    pub rank: i32,
    pub clear_time_ms: i64,
    pub updated_at: DateTimeUtc,
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
