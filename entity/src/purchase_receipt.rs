//! purchase_receipt entity
//! Store receipts already redeemed; the primary key rejects replays.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "purchase_receipt")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub receipt_id: String,
    pub account_id: i64,
    pub product_code: i64,
    pub purchased_at: DateTimeUtc,
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
