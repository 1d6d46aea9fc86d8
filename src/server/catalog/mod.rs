//! Immutable master data snapshot.
//!
//! The catalog is loaded once at startup from a JSON file, validated, and indexed for
//! lookups. It is shared as `Arc<Catalog>` and never mutated afterwards, so every account
//! reads it without locking. Tests build one from the `test-utils` fixture.

pub mod source;

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use crate::server::{
    catalog::source::CatalogSource, error::catalog::CatalogError, model::item::RewardItem,
};

/// Item attribute codes as used by the master data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemAttribute {
    Weapon,
    Armor,
    Accessory,
    MagicTool,
    Money,
}

impl ItemAttribute {
    /// Maps a master data attribute code to its attribute.
    ///
    /// # Returns
    /// - `Some(ItemAttribute)` - Code 1 through 5
    /// - `None` - Any other code
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Self::Weapon),
            2 => Some(Self::Armor),
            3 => Some(Self::Accessory),
            4 => Some(Self::MagicTool),
            5 => Some(Self::Money),
            _ => None,
        }
    }

    pub fn kind(self) -> ItemKind {
        match self {
            Self::Weapon | Self::Armor | Self::Accessory => ItemKind::Equipment,
            Self::MagicTool => ItemKind::Stackable,
            Self::Money => ItemKind::Currency,
        }
    }
}

/// How an item is stored once granted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    /// One item row per unit.
    Equipment,
    /// One row per code, count incremented on grant.
    Stackable,
    /// Added to the account's money balance, never stored as an item row.
    Currency,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItemDefinition {
    pub code: i64,
    pub name: String,
    pub attribute: ItemAttribute,
    pub attack: i64,
    pub defence: i64,
    pub magic: i64,
    pub enhance_max: i32,
}

impl ItemDefinition {
    pub fn kind(&self) -> ItemKind {
        self.attribute.kind()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnemyQuota {
    /// Kills required to clear the stage, also the kill ceiling.
    pub count: i64,
    /// Experience granted per required kill.
    pub exp: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StageDefinition {
    pub code: i64,
    /// Item code to the maximum count obtainable in one run.
    pub items: BTreeMap<i64, i64>,
    pub enemies: BTreeMap<i64, EnemyQuota>,
}

impl StageDefinition {
    fn new(code: i64) -> Self {
        Self {
            code,
            items: BTreeMap::new(),
            enemies: BTreeMap::new(),
        }
    }

    /// Experience for clearing the stage: every required enemy's exp times its count.
    pub fn exp_reward(&self) -> i64 {
        self.enemies
            .values()
            .map(|enemy| enemy.exp * enemy.count)
            .sum()
    }
}

#[derive(Debug, Clone)]
pub struct Catalog {
    items: HashMap<i64, ItemDefinition>,
    stages: BTreeMap<i64, StageDefinition>,
    exp_table: BTreeMap<i32, i64>,
    attendance_rewards: BTreeMap<i32, Vec<RewardItem>>,
    products: HashMap<i64, Vec<RewardItem>>,
    starter_items: Vec<RewardItem>,
}

impl Catalog {
    /// Reads and validates the catalog file at `path`.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let contents =
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| CatalogError::Read {
                    path: path.display().to_string(),
                    source,
                })?;

        Self::from_json(&contents)
    }

    pub fn from_json(contents: &str) -> Result<Self, CatalogError> {
        Self::from_source(serde_json::from_str(contents)?)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self, CatalogError> {
        Self::from_source(serde_json::from_value(value)?)
    }

    /// Validates raw rows and indexes them.
    ///
    /// # Returns
    /// - `Ok(Catalog)` - Every row is consistent
    /// - `Err(CatalogError)` - First inconsistency found (duplicate codes, references to
    ///   unknown items, non-positive quotas or thresholds, negative exp)
    pub fn from_source(source: CatalogSource) -> Result<Self, CatalogError> {
        let mut items = HashMap::new();
        for row in source.items {
            let attribute =
                ItemAttribute::from_code(row.attribute).ok_or(CatalogError::UnknownAttribute {
                    item_code: row.code,
                    attribute: row.attribute,
                })?;
            let definition = ItemDefinition {
                code: row.code,
                name: row.name,
                attribute,
                attack: row.attack,
                defence: row.defence,
                magic: row.magic,
                enhance_max: row.enhance_max.max(0),
            };
            if items.insert(row.code, definition).is_some() {
                return Err(CatalogError::DuplicateItem(row.code));
            }
        }

        let known = |table: &'static str, item_code: i64| {
            if items.contains_key(&item_code) {
                Ok(())
            } else {
                Err(CatalogError::UnknownItem { table, item_code })
            }
        };
        let positive = |table: &'static str, code: i64, value: i64| {
            if value > 0 {
                Ok(())
            } else {
                Err(CatalogError::NonPositive { table, code })
            }
        };

        let mut stages: BTreeMap<i64, StageDefinition> = BTreeMap::new();
        for row in source.stage_items {
            known("stage_items", row.item_code)?;
            positive("stage_items", row.item_code, row.max_count)?;
            let stage = stages
                .entry(row.stage_code)
                .or_insert_with(|| StageDefinition::new(row.stage_code));
            if stage.items.insert(row.item_code, row.max_count).is_some() {
                return Err(CatalogError::Duplicate {
                    table: "stage_items",
                    code: row.item_code,
                });
            }
        }
        for row in source.stage_enemies {
            positive("stage_enemies", row.enemy_code, row.count)?;
            if row.exp < 0 {
                return Err(CatalogError::NegativeExp {
                    stage_code: row.stage_code,
                    enemy_code: row.enemy_code,
                });
            }
            let stage = stages
                .entry(row.stage_code)
                .or_insert_with(|| StageDefinition::new(row.stage_code));
            let quota = EnemyQuota {
                count: row.count,
                exp: row.exp,
            };
            if stage.enemies.insert(row.enemy_code, quota).is_some() {
                return Err(CatalogError::Duplicate {
                    table: "stage_enemies",
                    code: row.enemy_code,
                });
            }
        }

        let mut exp_table = BTreeMap::new();
        for row in source.exp_table {
            positive("exp_table", row.level as i64, row.threshold)?;
            if exp_table.insert(row.level, row.threshold).is_some() {
                return Err(CatalogError::Duplicate {
                    table: "exp_table",
                    code: row.level as i64,
                });
            }
        }

        let mut attendance_rewards: BTreeMap<i32, Vec<RewardItem>> = BTreeMap::new();
        for row in source.attendance_rewards {
            known("attendance_rewards", row.item_code)?;
            positive("attendance_rewards", row.day as i64, row.count)?;
            positive("attendance_rewards", row.day as i64, row.day as i64)?;
            attendance_rewards
                .entry(row.day)
                .or_default()
                .push(RewardItem::new(row.item_code, row.count));
        }

        let mut products: HashMap<i64, Vec<RewardItem>> = HashMap::new();
        for row in source.in_app_products {
            known("in_app_products", row.item_code)?;
            positive("in_app_products", row.code, row.count)?;
            products
                .entry(row.code)
                .or_default()
                .push(RewardItem::new(row.item_code, row.count));
        }

        let mut starter_items = Vec::new();
        for row in source.starter_items {
            known("starter_items", row.item_code)?;
            positive("starter_items", row.item_code, row.count)?;
            starter_items.push(RewardItem::new(row.item_code, row.count));
        }

        Ok(Self {
            items,
            stages,
            exp_table,
            attendance_rewards,
            products,
            starter_items,
        })
    }

    pub fn item(&self, code: i64) -> Option<&ItemDefinition> {
        self.items.get(&code)
    }

    pub fn stage(&self, code: i64) -> Option<&StageDefinition> {
        self.stages.get(&code)
    }

    /// Every stage in ascending code order.
    pub fn stages(&self) -> impl Iterator<Item = &StageDefinition> {
        self.stages.values()
    }

    /// Stage that must be cleared before `code` can be selected.
    ///
    /// # Returns
    /// - `Some(code)` - The preceding stage in code order
    /// - `None` - `code` is the first stage (or unknown)
    pub fn required_stage(&self, code: i64) -> Option<i64> {
        self.stages.range(..code).next_back().map(|(code, _)| *code)
    }

    /// Experience needed to advance past `level`, `None` at the level cap.
    pub fn level_threshold(&self, level: i32) -> Option<i64> {
        self.exp_table.get(&level).copied()
    }

    pub fn attendance_reward(&self, day: i32) -> Option<&[RewardItem]> {
        self.attendance_rewards.get(&day).map(Vec::as_slice)
    }

    /// Length of the attendance cycle: the highest rewarded day.
    pub fn attendance_cycle(&self) -> i32 {
        self.attendance_rewards
            .keys()
            .next_back()
            .copied()
            .unwrap_or(0)
    }

    pub fn product(&self, code: i64) -> Option<&[RewardItem]> {
        self.products.get(&code).map(Vec::as_slice)
    }

    pub fn starter_items(&self) -> &[RewardItem] {
        &self.starter_items
    }
}
