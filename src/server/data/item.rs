use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::catalog::ItemDefinition;

/// Repository for item rows owned by accounts.
///
/// Destroyed items stay in the table with `destroyed = true` and are excluded from every
/// lookup.
pub struct ItemRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ItemRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all live items of an account ordered by id.
    pub async fn get_by_account(
        &self,
        account_id: i64,
    ) -> Result<Vec<entity::account_item::Model>, DbErr> {
        entity::prelude::AccountItem::find()
            .filter(entity::account_item::Column::AccountId.eq(account_id))
            .filter(entity::account_item::Column::Destroyed.eq(false))
            .order_by_asc(entity::account_item::Column::Id)
            .all(self.db)
            .await
    }

    /// Finds a live item by id, only if owned by `account_id`.
    pub async fn find_owned(
        &self,
        account_id: i64,
        item_id: i32,
    ) -> Result<Option<entity::account_item::Model>, DbErr> {
        entity::prelude::AccountItem::find_by_id(item_id)
            .filter(entity::account_item::Column::AccountId.eq(account_id))
            .filter(entity::account_item::Column::Destroyed.eq(false))
            .one(self.db)
            .await
    }

    /// Adds `count` to the account's stack of `item_code`, creating the stack if needed.
    pub async fn add_to_stack(
        &self,
        account_id: i64,
        item_code: i64,
        count: i64,
    ) -> Result<entity::account_item::Model, DbErr> {
        let existing = entity::prelude::AccountItem::find()
            .filter(entity::account_item::Column::AccountId.eq(account_id))
            .filter(entity::account_item::Column::ItemCode.eq(item_code))
            .filter(entity::account_item::Column::Destroyed.eq(false))
            .one(self.db)
            .await?;

        match existing {
            Some(stack) => {
                let total = stack.count + count;
                let mut active: entity::account_item::ActiveModel = stack.into();
                active.count = ActiveValue::Set(total);
                active.update(self.db).await
            }
            None => {
                entity::account_item::ActiveModel {
                    account_id: ActiveValue::Set(account_id),
                    item_code: ActiveValue::Set(item_code),
                    count: ActiveValue::Set(count),
                    enhance_level: ActiveValue::Set(0),
                    attack: ActiveValue::Set(0),
                    defence: ActiveValue::Set(0),
                    magic: ActiveValue::Set(0),
                    destroyed: ActiveValue::Set(false),
                    obtained_at: ActiveValue::Set(Utc::now()),
                    ..Default::default()
                }
                .insert(self.db)
                .await
            }
        }
    }

    /// Inserts one unenhanced unit of an equipment item with its catalog stats.
    pub async fn insert_unit(
        &self,
        account_id: i64,
        definition: &ItemDefinition,
    ) -> Result<entity::account_item::Model, DbErr> {
        entity::account_item::ActiveModel {
            account_id: ActiveValue::Set(account_id),
            item_code: ActiveValue::Set(definition.code),
            count: ActiveValue::Set(1),
            enhance_level: ActiveValue::Set(0),
            attack: ActiveValue::Set(definition.attack),
            defence: ActiveValue::Set(definition.defence),
            magic: ActiveValue::Set(definition.magic),
            destroyed: ActiveValue::Set(false),
            obtained_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Stores the result of a successful enhancement.
    pub async fn set_enhancement(
        &self,
        item: entity::account_item::Model,
        enhance_level: i32,
        attack: i64,
        defence: i64,
    ) -> Result<entity::account_item::Model, DbErr> {
        let mut active: entity::account_item::ActiveModel = item.into();
        active.enhance_level = ActiveValue::Set(enhance_level);
        active.attack = ActiveValue::Set(attack);
        active.defence = ActiveValue::Set(defence);

        active.update(self.db).await
    }

    /// Soft deletes an item by setting its destroyed flag.
    pub async fn destroy(
        &self,
        item: entity::account_item::Model,
    ) -> Result<entity::account_item::Model, DbErr> {
        let mut active: entity::account_item::ActiveModel = item.into();
        active.destroyed = ActiveValue::Set(true);

        active.update(self.db).await
    }
}
