//! Item factory for creating owned item rows.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test item rows owned by an account.
///
/// # Example
///
/// ```rust,ignore
/// let sword = ItemFactory::new(&db, account.account_id, 1)
///     .attack(10)
///     .enhance_level(2)
///     .build()
///     .await?;
/// ```
pub struct ItemFactory<'a> {
    db: &'a DatabaseConnection,
    account_id: i64,
    item_code: i64,
    count: i64,
    enhance_level: i32,
    attack: i64,
    defence: i64,
    magic: i64,
    destroyed: bool,
}

impl<'a> ItemFactory<'a> {
    /// Creates a new ItemFactory for one unit of `item_code` with zero stats.
    pub fn new(db: &'a DatabaseConnection, account_id: i64, item_code: i64) -> Self {
        Self {
            db,
            account_id,
            item_code,
            count: 1,
            enhance_level: 0,
            attack: 0,
            defence: 0,
            magic: 0,
            destroyed: false,
        }
    }

    pub fn count(mut self, count: i64) -> Self {
        self.count = count;
        self
    }

    pub fn enhance_level(mut self, enhance_level: i32) -> Self {
        self.enhance_level = enhance_level;
        self
    }

    pub fn attack(mut self, attack: i64) -> Self {
        self.attack = attack;
        self
    }

    pub fn defence(mut self, defence: i64) -> Self {
        self.defence = defence;
        self
    }

    pub fn destroyed(mut self, destroyed: bool) -> Self {
        self.destroyed = destroyed;
        self
    }

    /// Builds and inserts the item row.
    pub async fn build(self) -> Result<entity::account_item::Model, DbErr> {
        entity::account_item::ActiveModel {
            account_id: ActiveValue::Set(self.account_id),
            item_code: ActiveValue::Set(self.item_code),
            count: ActiveValue::Set(self.count),
            enhance_level: ActiveValue::Set(self.enhance_level),
            attack: ActiveValue::Set(self.attack),
            defence: ActiveValue::Set(self.defence),
            magic: ActiveValue::Set(self.magic),
            destroyed: ActiveValue::Set(self.destroyed),
            obtained_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an item row with `count` units of `item_code`.
pub async fn create_item(
    db: &DatabaseConnection,
    account_id: i64,
    item_code: i64,
    count: i64,
) -> Result<entity::account_item::Model, DbErr> {
    ItemFactory::new(db, account_id, item_code)
        .count(count)
        .build()
        .await
}
