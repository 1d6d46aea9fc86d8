//! Mail factory for creating mail records and attachments.

use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test mail records.
///
/// Defaults to an unread, undeleted mail with attachments that expires in 7 days.
pub struct MailFactory<'a> {
    db: &'a DatabaseConnection,
    account_id: i64,
    title: String,
    body: String,
    has_attachment: bool,
    is_deleted: bool,
    expires_at: chrono::DateTime<Utc>,
}

impl<'a> MailFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, account_id: i64) -> Self {
        let id = next_id();
        Self {
            db,
            account_id,
            title: format!("Mail {}", id),
            body: format!("Body of mail {}", id),
            has_attachment: true,
            is_deleted: false,
            expires_at: Utc::now() + Duration::days(7),
        }
    }

    pub fn has_attachment(mut self, has_attachment: bool) -> Self {
        self.has_attachment = has_attachment;
        self
    }

    pub fn deleted(mut self, is_deleted: bool) -> Self {
        self.is_deleted = is_deleted;
        self
    }

    pub fn expires_at(mut self, expires_at: chrono::DateTime<Utc>) -> Self {
        self.expires_at = expires_at;
        self
    }

    pub async fn build(self) -> Result<entity::mail::Model, DbErr> {
        entity::mail::ActiveModel {
            account_id: ActiveValue::Set(self.account_id),
            sender: ActiveValue::Set("System".to_string()),
            title: ActiveValue::Set(self.title),
            body: ActiveValue::Set(self.body),
            has_attachment: ActiveValue::Set(self.has_attachment),
            is_read: ActiveValue::Set(false),
            is_deleted: ActiveValue::Set(self.is_deleted),
            expires_at: ActiveValue::Set(self.expires_at),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a mail with default values for the account.
pub async fn create_mail(
    db: &DatabaseConnection,
    account_id: i64,
) -> Result<entity::mail::Model, DbErr> {
    MailFactory::new(db, account_id).build().await
}

/// Attaches an unreceived item to an existing mail.
pub async fn create_mail_item(
    db: &DatabaseConnection,
    mail_id: i32,
    item_code: i64,
    count: i64,
) -> Result<entity::mail_item::Model, DbErr> {
    entity::mail_item::ActiveModel {
        mail_id: ActiveValue::Set(mail_id),
        item_code: ActiveValue::Set(item_code),
        count: ActiveValue::Set(count),
        received: ActiveValue::Set(false),
        ..Default::default()
    }
    .insert(db)
    .await
}
