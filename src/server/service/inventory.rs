//! Item granting by item kind.
//!
//! Every path that hands items to an account (settlement, mail receipt, starter items)
//! goes through `Inventory::grant`, which dispatches on the catalog's `ItemKind`:
//! currency adds to the money balance, stackables merge into one row, equipment gets one
//! row per unit.

use sea_orm::ConnectionTrait;

use crate::server::{
    catalog::{Catalog, ItemKind},
    data::{account::AccountRepository, item::ItemRepository},
    error::grant::GrantError,
    model::item::RewardItem,
};

pub struct Inventory<'a, C: ConnectionTrait> {
    db: &'a C,
    catalog: &'a Catalog,
}

impl<'a, C: ConnectionTrait> Inventory<'a, C> {
    pub fn new(db: &'a C, catalog: &'a Catalog) -> Self {
        Self { db, catalog }
    }

    /// Grants `reward` to `account_id`.
    ///
    /// Callers run this inside a transaction; a failure partway through an equipment
    /// grant leaves the already inserted units to be rolled back with it.
    ///
    /// # Returns
    /// - `Ok(())` - Items granted
    /// - `Err(GrantError::UnknownItem)` - Code not in the catalog
    /// - `Err(GrantError::InvalidCount)` - Count below 1
    /// - `Err(GrantError::AccountNotFound)` - Currency grant to an account without progress
    /// - `Err(GrantError::Database)` - Write failed
    pub async fn grant(&self, account_id: i64, reward: RewardItem) -> Result<(), GrantError> {
        if reward.count < 1 {
            return Err(GrantError::InvalidCount {
                item_code: reward.item_code,
                count: reward.count,
            });
        }

        let definition = self
            .catalog
            .item(reward.item_code)
            .ok_or(GrantError::UnknownItem(reward.item_code))?;

        match definition.kind() {
            ItemKind::Currency => {
                AccountRepository::new(self.db)
                    .add_money(account_id, reward.count)
                    .await?
                    .ok_or(GrantError::AccountNotFound(account_id))?;
            }
            ItemKind::Stackable => {
                ItemRepository::new(self.db)
                    .add_to_stack(account_id, reward.item_code, reward.count)
                    .await?;
            }
            ItemKind::Equipment => {
                let items = ItemRepository::new(self.db);
                for _ in 0..reward.count {
                    items.insert_unit(account_id, definition).await?;
                }
            }
        }

        Ok(())
    }
}
