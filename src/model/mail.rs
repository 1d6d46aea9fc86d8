use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::item::RewardItemDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MailIdDto {
    pub mail_id: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MailItemDto {
    pub item_code: i64,
    pub count: i64,
    pub received: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MailDto {
    pub id: i32,
    pub sender: String,
    pub title: String,
    pub body: String,
    pub has_attachment: bool,
    pub expires_at: DateTime<Utc>,
    pub items: Vec<MailItemDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceivedItemsDto {
    pub mail_id: i32,
    pub items: Vec<RewardItemDto>,
}
