pub use sea_orm_migration::prelude::*;

mod m20261001_000001_create_account_progress_table;
mod m20261001_000002_create_account_item_table;
mod m20261001_000003_create_clear_record_table;
mod m20261002_000004_create_mail_table;
mod m20261002_000005_create_mail_item_table;
mod m20261003_000006_create_attendance_table;
mod m20261003_000007_create_purchase_receipt_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261001_000001_create_account_progress_table::Migration),
            Box::new(m20261001_000002_create_account_item_table::Migration),
            Box::new(m20261001_000003_create_clear_record_table::Migration),
            Box::new(m20261002_000004_create_mail_table::Migration),
            Box::new(m20261002_000005_create_mail_item_table::Migration),
            Box::new(m20261003_000006_create_attendance_table::Migration),
            Box::new(m20261003_000007_create_purchase_receipt_table::Migration),
        ]
    }
}
