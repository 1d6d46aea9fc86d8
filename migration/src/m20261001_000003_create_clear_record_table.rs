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
                    .table(ClearRecord::Table)
                    .if_not_exists()
                    .col(big_integer(ClearRecord::AccountId))
                    .col(big_integer(ClearRecord::StageCode))
                    .col(integer(ClearRecord::Rank))
                    .col(big_integer(ClearRecord::ClearTimeMs))
                    .col(
                        timestamp_with_time_zone(ClearRecord::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(ClearRecord::AccountId)
                            .col(ClearRecord::StageCode),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_clear_record_account_id")
                            .from(ClearRecord::Table, ClearRecord::AccountId)
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
            .drop_table(Table::drop().table(ClearRecord::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ClearRecord {
    Table,
    AccountId,
    StageCode,
    Rank,
    ClearTimeMs,
    UpdatedAt,
}
