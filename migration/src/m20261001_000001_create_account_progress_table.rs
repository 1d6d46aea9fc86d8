use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AccountProgress::Table)
                    .if_not_exists()
                    .col(big_integer(AccountProgress::AccountId).primary_key())
                    .col(integer(AccountProgress::Level).default(1))
                    .col(big_integer(AccountProgress::Exp).default(0))
                    .col(big_integer(AccountProgress::Money).default(0))
                    .col(integer(AccountProgress::StagesCleared).default(0))
                    .col(
                        timestamp_with_time_zone(AccountProgress::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(AccountProgress::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AccountProgress::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AccountProgress {
    Table,
    AccountId,
    Level,
    Exp,
    Money,
    StagesCleared,
    CreatedAt,
    UpdatedAt,
}
