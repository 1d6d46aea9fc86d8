//! Mail dispatch and mailbox operations.

use chrono::{DateTime, Utc};
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    catalog::Catalog,
    data::mail::MailRepository,
    error::mail::MailError,
    model::{
        item::RewardItem,
        mail::{Mail, RewardMail},
    },
    service::inventory::Inventory,
};

/// Creates a mail record together with its attached items.
///
/// Runs on whatever connection it is given. Workflows that send a reward as part of a
/// larger change (attendance, purchase) pass their transaction so the mail commits or
/// rolls back with it; `MailService::send_reward` wraps a standalone send in its own.
pub struct RewardMailDispatcher<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RewardMailDispatcher<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts the mail, then one attachment row per reward item.
    ///
    /// # Returns
    /// - `Ok(mail_id)` - Id of the created mail
    /// - `Err(MailError::RecordInsertFailed)` - Mail row could not be written
    /// - `Err(MailError::ItemInsertFailed)` - An attachment could not be written
    pub async fn send(&self, account_id: i64, mail: &RewardMail) -> Result<i32, MailError> {
        let repo = MailRepository::new(self.db);

        let record = repo.create(account_id, mail).await.map_err(|err| {
            tracing::error!(account_id, "Failed to create reward mail: {}", err);
            MailError::RecordInsertFailed(err)
        })?;

        for item in &mail.items {
            repo.add_item(record.id, *item).await.map_err(|err| {
                tracing::error!(
                    account_id,
                    mail_id = record.id,
                    item_code = item.item_code,
                    "Failed to attach item to reward mail: {}",
                    err
                );
                MailError::ItemInsertFailed(err)
            })?;
        }

        tracing::info!(account_id, mail_id = record.id, title = %mail.title, "Reward mail sent");

        Ok(record.id)
    }
}

pub struct MailService<'a> {
    db: &'a DatabaseConnection,
    catalog: &'a Catalog,
}

impl<'a> MailService<'a> {
    pub fn new(db: &'a DatabaseConnection, catalog: &'a Catalog) -> Self {
        Self { db, catalog }
    }

    /// Sends a reward mail in its own transaction.
    ///
    /// A failed attachment insert rolls back the mail record and every attachment
    /// already written for it.
    pub async fn send_reward(&self, account_id: i64, mail: &RewardMail) -> Result<i32, MailError> {
        let tx = self.db.begin().await?;

        let mail_id = RewardMailDispatcher::new(&tx).send(account_id, mail).await?;

        tx.commit().await?;

        Ok(mail_id)
    }

    /// Opens a mail and marks it read.
    ///
    /// # Returns
    /// - `Ok(Mail)` - Mail with its attachments
    /// - `Err(MailError::MailNotFound)` - Not owned by the account or deleted
    pub async fn read(&self, account_id: i64, mail_id: i32) -> Result<Mail, MailError> {
        let repo = MailRepository::new(self.db);

        let mail = repo
            .find_owned(account_id, mail_id)
            .await?
            .ok_or(MailError::MailNotFound(mail_id))?;
        let items = repo.get_items(mail_id).await?;

        let mail = if mail.is_read {
            mail
        } else {
            repo.mark_read(mail).await?
        };

        Ok(Mail::from_entity(mail, items))
    }

    /// Grants every attachment of a mail not yet received.
    ///
    /// Each attachment's received flag flips exactly once; a second call finds nothing
    /// left and fails with `AlreadyReceived` without granting anything.
    ///
    /// # Returns
    /// - `Ok(items)` - Items granted by this call
    /// - `Err(MailError::MailNotFound)` - Not owned by the account or deleted
    /// - `Err(MailError::AlreadyReceived)` - No attachment left to receive
    /// - `Err(MailError::MailExpired)` - Mail expired before `now`
    pub async fn receive_items(
        &self,
        account_id: i64,
        mail_id: i32,
        now: DateTime<Utc>,
    ) -> Result<Vec<RewardItem>, MailError> {
        let tx = self.db.begin().await?;
        let repo = MailRepository::new(&tx);

        let mail = repo
            .find_owned(account_id, mail_id)
            .await?
            .ok_or(MailError::MailNotFound(mail_id))?;

        let pending: Vec<_> = repo
            .get_items(mail_id)
            .await?
            .into_iter()
            .filter(|item| !item.received)
            .collect();
        if pending.is_empty() {
            return Err(MailError::AlreadyReceived(mail_id));
        }
        if mail.expires_at <= now {
            return Err(MailError::MailExpired(mail_id));
        }

        let inventory = Inventory::new(&tx, self.catalog);
        let mut granted = Vec::with_capacity(pending.len());
        for item in pending {
            let reward = RewardItem::new(item.item_code, item.count);
            inventory.grant(account_id, reward).await?;
            repo.mark_received(item).await?;
            granted.push(reward);
        }
        repo.close_attachment(mail).await?;

        tx.commit().await?;

        tracing::info!(account_id, mail_id, count = granted.len(), "Mail items received");

        Ok(granted)
    }

    /// Soft deletes a mail.
    pub async fn delete(&self, account_id: i64, mail_id: i32) -> Result<(), MailError> {
        let repo = MailRepository::new(self.db);

        let mail = repo
            .find_owned(account_id, mail_id)
            .await?
            .ok_or(MailError::MailNotFound(mail_id))?;
        repo.soft_delete(mail).await?;

        Ok(())
    }
}
