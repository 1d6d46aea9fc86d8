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
                    .table(Attendance::Table)
                    .if_not_exists()
                    .col(big_integer(Attendance::AccountId).primary_key())
                    .col(integer(Attendance::Streak).default(0))
                    .col(timestamp_with_time_zone_null(Attendance::LastAttendedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_attendance_account_id")
                            .from(Attendance::Table, Attendance::AccountId)
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
            .drop_table(Table::drop().table(Attendance::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Attendance {
    Table,
    AccountId,
    Streak,
    LastAttendedAt,
}
