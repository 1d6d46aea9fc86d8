use sea_orm_migration::{prelude::*, schema::*};

use super::m20261001_000001_create_account_progress_table::AccountProgress;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Mail::Table)
                    .if_not_exists()
                    .col(pk_auto(Mail::Id))
                    .col(big_integer(Mail::AccountId))
                    .col(string(Mail::Sender))
                    .col(string(Mail::Title))
                    .col(text(Mail::Body))
                    .col(boolean(Mail::HasAttachment).default(false))
                    .col(boolean(Mail::IsRead).default(false))
                    .col(boolean(Mail::IsDeleted).default(false))
                    .col(timestamp_with_time_zone(Mail::ExpiresAt))
                    .col(
                        timestamp_with_time_zone(Mail::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mail_account_id")
                            .from(Mail::Table, Mail::AccountId)
                            .to(AccountProgress::Table, AccountProgress::AccountId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Mail::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Mail {
    Table,
    Id,
    AccountId,
    Sender,
    Title,
    Body,
    HasAttachment,
    IsRead,
    IsDeleted,
    ExpiresAt,
    CreatedAt,
}
