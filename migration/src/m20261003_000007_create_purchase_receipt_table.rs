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
                    .table(PurchaseReceipt::Table)
                    .if_not_exists()
                    .col(string(PurchaseReceipt::ReceiptId).primary_key())
                    .col(big_integer(PurchaseReceipt::AccountId))
                    .col(big_integer(PurchaseReceipt::ProductCode))
                    .col(
                        timestamp_with_time_zone(PurchaseReceipt::PurchasedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_purchase_receipt_account_id")
                            .from(PurchaseReceipt::Table, PurchaseReceipt::AccountId)
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
            .drop_table(Table::drop().table(PurchaseReceipt::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PurchaseReceipt {
    Table,
    ReceiptId,
    AccountId,
    ProductCode,
    PurchasedAt,
}
