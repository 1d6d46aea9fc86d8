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
                    .table(AccountItem::Table)
                    .if_not_exists()
                    .col(pk_auto(AccountItem::Id))
                    .col(big_integer(AccountItem::AccountId))
                    .col(big_integer(AccountItem::ItemCode))
                    .col(big_integer(AccountItem::Count))
                    .col(integer(AccountItem::EnhanceLevel).default(0))
                    .col(big_integer(AccountItem::Attack).default(0))
                    .col(big_integer(AccountItem::Defence).default(0))
                    .col(big_integer(AccountItem::Magic).default(0))
                    .col(boolean(AccountItem::Destroyed).default(false))
                    .col(
                        timestamp_with_time_zone(AccountItem::ObtainedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_account_item_account_id")
                            .from(AccountItem::Table, AccountItem::AccountId)
                            .to(AccountProgress::Table, AccountProgress::AccountId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_account_item_account_code")
                    .table(AccountItem::Table)
                    .col(AccountItem::AccountId)
                    .col(AccountItem::ItemCode)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AccountItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AccountItem {
    Table,
    Id,
    AccountId,
    ItemCode,
    Count,
    EnhanceLevel,
    Attack,
    Defence,
    Magic,
    Destroyed,
    ObtainedAt,
}
