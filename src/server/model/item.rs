//! Item domain models.

use chrono::{DateTime, Utc};

use crate::model::item::{EnhanceResultDto, ItemDto, RewardItemDto};

/// An item code and amount to hand out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewardItem {
    pub item_code: i64,
    pub count: i64,
}

impl RewardItem {
    pub fn new(item_code: i64, count: i64) -> Self {
        Self { item_code, count }
    }

    pub fn into_dto(self) -> RewardItemDto {
        RewardItemDto {
            item_code: self.item_code,
            count: self.count,
        }
    }
}

/// An item row owned by an account.
#[derive(Debug, Clone, PartialEq)]
pub struct OwnedItem {
    pub id: i32,
    pub account_id: i64,
    pub item_code: i64,
    pub count: i64,
    pub enhance_level: i32,
    pub attack: i64,
    pub defence: i64,
    pub magic: i64,
    pub obtained_at: DateTime<Utc>,
}

impl OwnedItem {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::account_item::Model) -> Self {
        Self {
            id: entity.id,
            account_id: entity.account_id,
            item_code: entity.item_code,
            count: entity.count,
            enhance_level: entity.enhance_level,
            attack: entity.attack,
            defence: entity.defence,
            magic: entity.magic,
            obtained_at: entity.obtained_at,
        }
    }

    pub fn into_dto(self) -> ItemDto {
        ItemDto {
            id: self.id,
            item_code: self.item_code,
            count: self.count,
            enhance_level: self.enhance_level,
            attack: self.attack,
            defence: self.defence,
            magic: self.magic,
            obtained_at: self.obtained_at,
        }
    }
}

/// Outcome of an enhancement attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct Enhancement {
    pub success: bool,
    /// The enhanced item, `None` when the attempt destroyed it.
    pub item: Option<OwnedItem>,
    /// Money balance after paying the cost.
    pub money: i64,
}

impl Enhancement {
    pub fn into_dto(self) -> EnhanceResultDto {
        EnhanceResultDto {
            success: self.success,
            item: self.item.map(OwnedItem::into_dto),
            money: self.money,
        }
    }
}

/// Stat multiplier applied on every successful enhancement.
pub const ENHANCE_STAT_MULTIPLIER: f64 = 1.1;

/// Chance of an enhancement attempt succeeding.
pub const ENHANCE_SUCCESS_RATE: f64 = 0.85;

/// Money charged for enhancing an item currently at `level`.
pub fn enhance_cost(level: i32) -> i64 {
    (level as i64 + 1) * 10
}

/// Scales a stat by the enhancement multiplier, rounding to the nearest integer.
pub fn enhanced_stat(value: i64) -> i64 {
    (value as f64 * ENHANCE_STAT_MULTIPLIER).round() as i64
}
