use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

/// Repository for redeemed in-app purchase receipts.
pub struct PurchaseRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PurchaseRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find(
        &self,
        receipt_id: &str,
    ) -> Result<Option<entity::purchase_receipt::Model>, DbErr> {
        entity::prelude::PurchaseReceipt::find_by_id(receipt_id.to_string())
            .one(self.db)
            .await
    }

    pub async fn create(
        &self,
        receipt_id: &str,
        account_id: i64,
        product_code: i64,
    ) -> Result<entity::purchase_receipt::Model, DbErr> {
        entity::purchase_receipt::ActiveModel {
            receipt_id: ActiveValue::Set(receipt_id.to_string()),
            account_id: ActiveValue::Set(account_id),
            product_code: ActiveValue::Set(product_code),
            purchased_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}
