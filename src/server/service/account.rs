//! Account creation and loading.

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    catalog::Catalog,
    data::{
        account::AccountRepository, attendance::AttendanceRepository,
        clear_record::ClearRecordRepository, item::ItemRepository,
    },
    error::{account::AccountError, AppError},
    model::{
        account::{Account, AccountProgress},
        dungeon::ClearRecord,
        item::OwnedItem,
    },
    service::inventory::Inventory,
};

pub struct AccountService<'a> {
    db: &'a DatabaseConnection,
    catalog: &'a Catalog,
}

impl<'a> AccountService<'a> {
    pub fn new(db: &'a DatabaseConnection, catalog: &'a Catalog) -> Self {
        Self { db, catalog }
    }

    /// Creates an account with its attendance row and the catalog's starter items.
    ///
    /// # Returns
    /// - `Ok(Account)` - Freshly created account
    /// - `Err(AccountError::AlreadyExists)` - Account id already in use
    /// - `Err(AccountError::StarterGrantFailed)` - Starter items could not be granted
    pub async fn create(&self, account_id: i64) -> Result<Account, AppError> {
        let tx = self.db.begin().await?;
        let accounts = AccountRepository::new(&tx);

        if accounts.find(account_id).await?.is_some() {
            return Err(AccountError::AlreadyExists(account_id).into());
        }

        accounts.create(account_id).await?;
        AttendanceRepository::new(&tx).create(account_id).await?;

        let inventory = Inventory::new(&tx, self.catalog);
        for item in self.catalog.starter_items() {
            inventory
                .grant(account_id, *item)
                .await
                .map_err(AccountError::StarterGrantFailed)?;
        }

        let account = Self::load_with(&tx, account_id).await?;

        tx.commit().await?;

        tracing::info!(account_id, "Account created");

        Ok(account)
    }

    /// Loads an account's progress and live items.
    pub async fn load(&self, account_id: i64) -> Result<Account, AppError> {
        Self::load_with(self.db, account_id).await
    }

    /// Every clear record of the account ordered by stage.
    pub async fn clear_records(&self, account_id: i64) -> Result<Vec<ClearRecord>, AppError> {
        Ok(ClearRecordRepository::new(self.db)
            .get_by_account(account_id)
            .await?)
    }

    async fn load_with<C: ConnectionTrait>(
        db: &C,
        account_id: i64,
    ) -> Result<Account, AppError> {
        let progress = AccountRepository::new(db)
            .find(account_id)
            .await?
            .ok_or(AccountError::NotFound(account_id))?;
        let items = ItemRepository::new(db).get_by_account(account_id).await?;

        Ok(Account {
            progress: AccountProgress::from_entity(progress),
            items: items.into_iter().map(OwnedItem::from_entity).collect(),
        })
    }
}
