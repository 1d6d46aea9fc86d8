//! Raw rows of the master data file, as deserialized from JSON.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSource {
    pub items: Vec<ItemRow>,
    pub stage_items: Vec<StageItemRow>,
    pub stage_enemies: Vec<StageEnemyRow>,
    pub exp_table: Vec<ExpRow>,
    #[serde(default)]
    pub attendance_rewards: Vec<AttendanceRewardRow>,
    #[serde(default)]
    pub in_app_products: Vec<ProductRow>,
    #[serde(default)]
    pub starter_items: Vec<StarterItemRow>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ItemRow {
    pub code: i64,
    pub name: String,
    pub attribute: i64,
    #[serde(default)]
    pub attack: i64,
    #[serde(default)]
    pub defence: i64,
    #[serde(default)]
    pub magic: i64,
    #[serde(default)]
    pub enhance_max: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StageItemRow {
    pub stage_code: i64,
    pub item_code: i64,
    pub max_count: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StageEnemyRow {
    pub stage_code: i64,
    pub enemy_code: i64,
    pub count: i64,
    pub exp: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExpRow {
    pub level: i32,
    pub threshold: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AttendanceRewardRow {
    pub day: i32,
    pub item_code: i64,
    pub count: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductRow {
    pub code: i64,
    pub item_code: i64,
    pub count: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StarterItemRow {
    pub item_code: i64,
    pub count: i64,
}
