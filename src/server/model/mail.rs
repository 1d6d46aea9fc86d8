//! Mail domain models.

use chrono::{DateTime, Utc};

use crate::{
    model::mail::{MailDto, MailItemDto},
    server::model::item::RewardItem,
};

/// Sender shown on mail generated by the server.
pub const SYSTEM_SENDER: &str = "System";

/// A mail to dispatch with its attached rewards.
#[derive(Debug, Clone, PartialEq)]
pub struct RewardMail {
    pub sender: String,
    pub title: String,
    pub body: String,
    pub items: Vec<RewardItem>,
    pub expires_at: DateTime<Utc>,
}

impl RewardMail {
    /// Creates a system mail carrying `items`.
    pub fn system(
        title: impl Into<String>,
        body: impl Into<String>,
        items: Vec<RewardItem>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            sender: SYSTEM_SENDER.to_string(),
            title: title.into(),
            body: body.into(),
            items,
            expires_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MailItem {
    pub id: i32,
    pub item_code: i64,
    pub count: i64,
    pub received: bool,
}

impl MailItem {
    pub fn from_entity(entity: entity::mail_item::Model) -> Self {
        Self {
            id: entity.id,
            item_code: entity.item_code,
            count: entity.count,
            received: entity.received,
        }
    }

    pub fn into_dto(self) -> MailItemDto {
        MailItemDto {
            item_code: self.item_code,
            count: self.count,
            received: self.received,
        }
    }
}

/// A mail with its attachments.
#[derive(Debug, Clone, PartialEq)]
pub struct Mail {
    pub id: i32,
    pub account_id: i64,
    pub sender: String,
    pub title: String,
    pub body: String,
    pub has_attachment: bool,
    pub is_read: bool,
    pub expires_at: DateTime<Utc>,
    pub items: Vec<MailItem>,
}

impl Mail {
    /// Converts entity models to a domain model at the repository boundary.
    pub fn from_entity(
        entity: entity::mail::Model,
        items: Vec<entity::mail_item::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            account_id: entity.account_id,
            sender: entity.sender,
            title: entity.title,
            body: entity.body,
            has_attachment: entity.has_attachment,
            is_read: entity.is_read,
            expires_at: entity.expires_at,
            items: items.into_iter().map(MailItem::from_entity).collect(),
        }
    }

    pub fn into_dto(self) -> MailDto {
        MailDto {
            id: self.id,
            sender: self.sender,
            title: self.title,
            body: self.body,
            has_attachment: self.has_attachment,
            expires_at: self.expires_at,
            items: self.items.into_iter().map(MailItem::into_dto).collect(),
        }
    }
}
