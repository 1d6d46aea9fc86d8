//! Account progress domain model and leveling rules.

use crate::{
    model::account::{AccountDto, AccountProgressDto},
    server::{catalog::Catalog, model::item::OwnedItem},
};

#[derive(Debug, Clone, PartialEq)]
pub struct AccountProgress {
    pub account_id: i64,
    pub level: i32,
    pub exp: i64,
    pub money: i64,
    pub stages_cleared: i32,
}

impl AccountProgress {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::account_progress::Model) -> Self {
        Self {
            account_id: entity.account_id,
            level: entity.level,
            exp: entity.exp,
            money: entity.money,
            stages_cleared: entity.stages_cleared,
        }
    }

    pub fn into_dto(self) -> AccountProgressDto {
        AccountProgressDto {
            account_id: self.account_id,
            level: self.level,
            exp: self.exp,
            money: self.money,
            stages_cleared: self.stages_cleared,
        }
    }
}

/// An account's progress with its live items.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub progress: AccountProgress,
    pub items: Vec<OwnedItem>,
}

impl Account {
    pub fn into_dto(self) -> AccountDto {
        AccountDto {
            progress: self.progress.into_dto(),
            items: self.items.into_iter().map(OwnedItem::into_dto).collect(),
        }
    }
}

/// Level and in-level experience after applying a gain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Leveled {
    pub level: i32,
    pub exp: i64,
}

/// Applies `gain` experience to (`level`, `exp`) using the catalog's thresholds.
///
/// Levels up while the accumulated experience reaches the current level's threshold,
/// carrying the remainder over. The result always has `exp` strictly below the threshold
/// of the resulting level. Once a level without a threshold (the cap) is reached, the
/// rest of the gain is discarded; an account already at the cap keeps its experience.
pub fn apply_experience(level: i32, exp: i64, gain: i64, catalog: &Catalog) -> Leveled {
    let mut level = level;
    let mut exp = exp;
    let mut remaining = gain.max(0);

    while let Some(threshold) = catalog.level_threshold(level) {
        if exp + remaining < threshold {
            return Leveled {
                level,
                exp: exp + remaining,
            };
        }

        remaining -= threshold - exp;
        exp = 0;
        level += 1;
    }

    Leveled { level, exp }
}
