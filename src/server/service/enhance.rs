//! Equipment enhancement.

use rand::Rng;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    catalog::{Catalog, ItemAttribute},
    data::{account::AccountRepository, item::ItemRepository},
    error::enhance::EnhanceError,
    model::item::{enhance_cost, enhanced_stat, Enhancement, OwnedItem, ENHANCE_SUCCESS_RATE},
};

pub struct EnhanceService<'a> {
    db: &'a DatabaseConnection,
    catalog: &'a Catalog,
}

impl<'a> EnhanceService<'a> {
    pub fn new(db: &'a DatabaseConnection, catalog: &'a Catalog) -> Self {
        Self { db, catalog }
    }

    /// Attempts to enhance an item, succeeding with `ENHANCE_SUCCESS_RATE` chance.
    pub async fn enhance(&self, account_id: i64, item_id: i32) -> Result<Enhancement, EnhanceError> {
        let success = rand::rng().random_bool(ENHANCE_SUCCESS_RATE);

        self.enhance_with_outcome(account_id, item_id, success).await
    }

    /// Applies an enhancement attempt with a predetermined outcome.
    ///
    /// The cost is charged either way. Success raises the level by one and scales
    /// attack for weapons or defence for armor; failure destroys the item.
    ///
    /// # Returns
    /// - `Ok(Enhancement)` - Attempt applied
    /// - `Err(EnhanceError::ItemNotFound)` - Not owned by the account or destroyed
    /// - `Err(EnhanceError::NotEnhanceable)` - Item definition has no enhancement levels
    /// - `Err(EnhanceError::AlreadyMaxEnhanced)` - Item at its maximum level
    /// - `Err(EnhanceError::NotEnoughMoney)` - Balance below the cost
    pub async fn enhance_with_outcome(
        &self,
        account_id: i64,
        item_id: i32,
        success: bool,
    ) -> Result<Enhancement, EnhanceError> {
        let tx = self.db.begin().await?;
        let items = ItemRepository::new(&tx);
        let accounts = AccountRepository::new(&tx);

        let item = items
            .find_owned(account_id, item_id)
            .await?
            .ok_or(EnhanceError::ItemNotFound(item_id))?;

        let definition = self
            .catalog
            .item(item.item_code)
            .filter(|definition| definition.enhance_max > 0)
            .ok_or(EnhanceError::NotEnhanceable(item.item_code))?;
        if item.enhance_level >= definition.enhance_max {
            return Err(EnhanceError::AlreadyMaxEnhanced(item_id));
        }

        let cost = enhance_cost(item.enhance_level);
        let progress = accounts
            .find(account_id)
            .await?
            .ok_or(EnhanceError::AccountNotFound(account_id))?;
        if progress.money < cost {
            return Err(EnhanceError::NotEnoughMoney {
                required: cost,
                balance: progress.money,
            });
        }
        let money = accounts
            .add_money(account_id, -cost)
            .await?
            .ok_or(EnhanceError::AccountNotFound(account_id))?
            .money;

        let item = if success {
            let (attack, defence) = match definition.attribute {
                ItemAttribute::Weapon => (enhanced_stat(item.attack), item.defence),
                ItemAttribute::Armor => (item.attack, enhanced_stat(item.defence)),
                _ => (item.attack, item.defence),
            };
            let level = item.enhance_level + 1;
            let enhanced = items.set_enhancement(item, level, attack, defence).await?;
            Some(OwnedItem::from_entity(enhanced))
        } else {
            items.destroy(item).await?;
            None
        };

        tx.commit().await?;

        tracing::info!(account_id, item_id, success, cost, "Item enhancement attempted");

        Ok(Enhancement {
            success,
            item,
            money,
        })
    }
}
