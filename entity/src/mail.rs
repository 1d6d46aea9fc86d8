//! mail entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "mail")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub account_id: i64,
    pub sender: String,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub body: String,
    pub has_attachment: bool,
    pub is_read: bool,
    pub is_deleted: bool,
    pub expires_at: DateTimeUtc,
    pub created_at: DateTimeUtc,
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
    #[sea_orm(has_many = "super::mail_item::Entity")]
    MailItem,
}

impl Related<super::account_progress::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AccountProgress.def()
    }
}

impl Related<super::mail_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MailItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
