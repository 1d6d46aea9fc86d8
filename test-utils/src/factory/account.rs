//! Account factory for creating test account progress rows.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test accounts with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::account::AccountFactory;
///
/// let account = AccountFactory::new(&db)
///     .level(2)
///     .exp(15)
///     .build()
///     .await?;
/// ```
pub struct AccountFactory<'a> {
    db: &'a DatabaseConnection,
    account_id: i64,
    level: i32,
    exp: i64,
    money: i64,
    stages_cleared: i32,
}

impl<'a> AccountFactory<'a> {
    /// Creates a new AccountFactory with default values.
    ///
    /// Defaults:
    /// - account_id: auto-incremented
    /// - level: `1`
    /// - exp: `0`
    /// - money: `0`
    /// - stages_cleared: `0`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            account_id: next_id() as i64,
            level: 1,
            exp: 0,
            money: 0,
            stages_cleared: 0,
        }
    }

    /// Sets the account id.
    pub fn account_id(mut self, account_id: i64) -> Self {
        self.account_id = account_id;
        self
    }

    /// Sets the level.
    pub fn level(mut self, level: i32) -> Self {
        self.level = level;
        self
    }

    /// Sets the experience carried within the current level.
    pub fn exp(mut self, exp: i64) -> Self {
        self.exp = exp;
        self
    }

    /// Sets the currency balance.
    pub fn money(mut self, money: i64) -> Self {
        self.money = money;
        self
    }

    /// Sets the cleared stage counter.
    pub fn stages_cleared(mut self, stages_cleared: i32) -> Self {
        self.stages_cleared = stages_cleared;
        self
    }

    /// Builds and inserts the account entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::account_progress::Model)` - Created account entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::account_progress::Model, DbErr> {
        let now = Utc::now();
        entity::account_progress::ActiveModel {
            account_id: ActiveValue::Set(self.account_id),
            level: ActiveValue::Set(self.level),
            exp: ActiveValue::Set(self.exp),
            money: ActiveValue::Set(self.money),
            stages_cleared: ActiveValue::Set(self.stages_cleared),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an account with default values.
///
/// Shorthand for `AccountFactory::new(db).build().await`.
pub async fn create_account(
    db: &DatabaseConnection,
) -> Result<entity::account_progress::Model, DbErr> {
    AccountFactory::new(db).build().await
}
