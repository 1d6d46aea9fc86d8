//! mail_item entity
//! Attachment rows; `received` flips to true exactly once.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "mail_item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub mail_id: i32,
    pub item_code: i64,
    pub count: i64,
    pub received: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::mail::Entity",
        from = "Column::MailId",
        to = "super::mail::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Mail,
}

impl Related<super::mail::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Mail.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
