use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

/// Repository for the per-account progress row (level, exp, money, counters).
///
/// Generic over the connection so it runs on a pooled connection or inside a transaction.
pub struct AccountRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AccountRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a fresh progress row at level 1 with no exp or money.
    pub async fn create(&self, account_id: i64) -> Result<entity::account_progress::Model, DbErr> {
        let now = Utc::now();

        entity::account_progress::ActiveModel {
            account_id: ActiveValue::Set(account_id),
            level: ActiveValue::Set(1),
            exp: ActiveValue::Set(0),
            money: ActiveValue::Set(0),
            stages_cleared: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }

    pub async fn find(
        &self,
        account_id: i64,
    ) -> Result<Option<entity::account_progress::Model>, DbErr> {
        entity::prelude::AccountProgress::find_by_id(account_id)
            .one(self.db)
            .await
    }

    /// Adds `delta` to the money balance. A negative delta spends money.
    ///
    /// # Returns
    /// - `Ok(Some(model))` - Updated row
    /// - `Ok(None)` - Account has no progress row
    pub async fn add_money(
        &self,
        account_id: i64,
        delta: i64,
    ) -> Result<Option<entity::account_progress::Model>, DbErr> {
        let Some(progress) = self.find(account_id).await? else {
            return Ok(None);
        };

        let money = progress.money + delta;
        let mut active: entity::account_progress::ActiveModel = progress.into();
        active.money = ActiveValue::Set(money);
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(active.update(self.db).await?))
    }

    /// Persists the level and in-level experience in one write.
    pub async fn set_level(
        &self,
        progress: entity::account_progress::Model,
        level: i32,
        exp: i64,
    ) -> Result<entity::account_progress::Model, DbErr> {
        let mut active: entity::account_progress::ActiveModel = progress.into();
        active.level = ActiveValue::Set(level);
        active.exp = ActiveValue::Set(exp);
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await
    }

    /// Increments the cleared stage counter.
    pub async fn increment_stages_cleared(
        &self,
        account_id: i64,
    ) -> Result<Option<entity::account_progress::Model>, DbErr> {
        let Some(progress) = self.find(account_id).await? else {
            return Ok(None);
        };

        let stages_cleared = progress.stages_cleared + 1;
        let mut active: entity::account_progress::ActiveModel = progress.into();
        active.stages_cleared = ActiveValue::Set(stages_cleared);
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(active.update(self.db).await?))
    }
}
