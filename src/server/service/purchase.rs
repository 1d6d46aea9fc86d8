//! In-app purchase redemption.

use chrono::{Duration, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    catalog::Catalog,
    data::purchase::PurchaseRepository,
    error::purchase::PurchaseError,
    model::mail::RewardMail,
    service::mail::RewardMailDispatcher,
};

/// Days a purchase mail stays receivable.
pub const PURCHASE_MAIL_EXPIRY_DAYS: i64 = 3650;

pub struct PurchaseService<'a> {
    db: &'a DatabaseConnection,
    catalog: &'a Catalog,
}

impl<'a> PurchaseService<'a> {
    pub fn new(db: &'a DatabaseConnection, catalog: &'a Catalog) -> Self {
        Self { db, catalog }
    }

    /// Redeems a store receipt by mailing the product's items.
    ///
    /// The receipt row and the mail commit together, so a receipt is never recorded
    /// without its reward and never redeemed twice.
    ///
    /// # Returns
    /// - `Ok(mail_id)` - Reward mail created
    /// - `Err(PurchaseError::UnknownProduct)` - Product not in the catalog
    /// - `Err(PurchaseError::DuplicateReceipt)` - Receipt already redeemed
    pub async fn redeem(
        &self,
        account_id: i64,
        receipt_id: &str,
        product_code: i64,
    ) -> Result<i32, PurchaseError> {
        let items = self
            .catalog
            .product(product_code)
            .ok_or(PurchaseError::UnknownProduct(product_code))?;

        let tx = self.db.begin().await?;
        let receipts = PurchaseRepository::new(&tx);

        if let Some(existing) = receipts.find(receipt_id).await? {
            tracing::warn!(
                account_id,
                receipt_id,
                owner = existing.account_id,
                "Duplicate purchase receipt"
            );
            return Err(PurchaseError::DuplicateReceipt(receipt_id.to_string()));
        }

        receipts.create(receipt_id, account_id, product_code).await?;

        let mail = RewardMail::system(
            "Purchase reward",
            format!("Thank you for purchasing product {}", product_code),
            items.to_vec(),
            Utc::now() + Duration::days(PURCHASE_MAIL_EXPIRY_DAYS),
        );
        let mail_id = RewardMailDispatcher::new(&tx).send(account_id, &mail).await?;

        tx.commit().await?;

        tracing::info!(account_id, product_code, mail_id, "Purchase redeemed");

        Ok(mail_id)
    }
}
