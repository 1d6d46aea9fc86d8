use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDto {
    pub id: i32,
    pub item_code: i64,
    pub count: i64,
    pub enhance_level: i32,
    pub attack: i64,
    pub defence: i64,
    pub magic: i64,
    pub obtained_at: DateTime<Utc>,
}

/// An item code and amount, used for rewards and dungeon loot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardItemDto {
    pub item_code: i64,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnhanceItemDto {
    pub item_id: i32,
}

/// Outcome of an enhancement attempt.
///
/// When `success` is false the item was destroyed and `item` is `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnhanceResultDto {
    pub success: bool,
    pub item: Option<ItemDto>,
    pub money: i64,
}
