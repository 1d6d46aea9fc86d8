use sea_orm_migration::{prelude::*, schema::*};

use super::m20261002_000004_create_mail_table::Mail;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MailItem::Table)
                    .if_not_exists()
                    .col(pk_auto(MailItem::Id))
                    .col(integer(MailItem::MailId))
                    .col(big_integer(MailItem::ItemCode))
                    .col(big_integer(MailItem::Count))
                    .col(boolean(MailItem::Received).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mail_item_mail_id")
                            .from(MailItem::Table, MailItem::MailId)
                            .to(Mail::Table, Mail::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MailItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MailItem {
    Table,
    Id,
    MailId,
    ItemCode,
    Count,
    Received,
}
