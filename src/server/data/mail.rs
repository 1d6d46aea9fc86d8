use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::{item::RewardItem, mail::RewardMail};

/// Repository for mail records and their attached items.
pub struct MailRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MailRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts the mail record. Attachments are added with `add_item`.
    pub async fn create(
        &self,
        account_id: i64,
        mail: &RewardMail,
    ) -> Result<entity::mail::Model, DbErr> {
        entity::mail::ActiveModel {
            account_id: ActiveValue::Set(account_id),
            sender: ActiveValue::Set(mail.sender.clone()),
            title: ActiveValue::Set(mail.title.clone()),
            body: ActiveValue::Set(mail.body.clone()),
            has_attachment: ActiveValue::Set(!mail.items.is_empty()),
            is_read: ActiveValue::Set(false),
            is_deleted: ActiveValue::Set(false),
            expires_at: ActiveValue::Set(mail.expires_at),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn add_item(
        &self,
        mail_id: i32,
        item: RewardItem,
    ) -> Result<entity::mail_item::Model, DbErr> {
        entity::mail_item::ActiveModel {
            mail_id: ActiveValue::Set(mail_id),
            item_code: ActiveValue::Set(item.item_code),
            count: ActiveValue::Set(item.count),
            received: ActiveValue::Set(false),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds a mail by id, only if owned by `account_id` and not deleted.
    pub async fn find_owned(
        &self,
        account_id: i64,
        mail_id: i32,
    ) -> Result<Option<entity::mail::Model>, DbErr> {
        entity::prelude::Mail::find_by_id(mail_id)
            .filter(entity::mail::Column::AccountId.eq(account_id))
            .filter(entity::mail::Column::IsDeleted.eq(false))
            .one(self.db)
            .await
    }

    pub async fn get_items(&self, mail_id: i32) -> Result<Vec<entity::mail_item::Model>, DbErr> {
        entity::prelude::MailItem::find()
            .filter(entity::mail_item::Column::MailId.eq(mail_id))
            .order_by_asc(entity::mail_item::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn mark_read(&self, mail: entity::mail::Model) -> Result<entity::mail::Model, DbErr> {
        let mut active: entity::mail::ActiveModel = mail.into();
        active.is_read = ActiveValue::Set(true);

        active.update(self.db).await
    }

    pub async fn mark_received(
        &self,
        item: entity::mail_item::Model,
    ) -> Result<entity::mail_item::Model, DbErr> {
        let mut active: entity::mail_item::ActiveModel = item.into();
        active.received = ActiveValue::Set(true);

        active.update(self.db).await
    }

    /// Marks the mail read and clears its attachment flag once every item was received.
    pub async fn close_attachment(
        &self,
        mail: entity::mail::Model,
    ) -> Result<entity::mail::Model, DbErr> {
        let mut active: entity::mail::ActiveModel = mail.into();
        active.has_attachment = ActiveValue::Set(false);
        active.is_read = ActiveValue::Set(true);

        active.update(self.db).await
    }

    pub async fn soft_delete(
        &self,
        mail: entity::mail::Model,
    ) -> Result<entity::mail::Model, DbErr> {
        let mut active: entity::mail::ActiveModel = mail.into();
        active.is_deleted = ActiveValue::Set(true);

        active.update(self.db).await
    }
}
