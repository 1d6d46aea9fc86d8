//! Sample master data catalog.
//!
//! Two stages, one level table and reward tables small enough to reason about in
//! assertions:
//!
//! - Stage 1: enemy `SLIME` x2 (10 exp each), drops `POTION` (max 3) and `GOLD` (max 100)
//! - Stage 2: enemy `SLIME` x3 (10 exp), `GOLEM` x1 (50 exp), drops `SWORD` (max 1) and
//!   `POTION` (max 2). Requires a stage 1 clear.
//! - Level thresholds: 1 → 20, 2 → 40, 3 → 80, 4 → 160, level 5 is the cap.

use serde_json::{json, Value};

pub const SWORD: i64 = 1;
pub const LEATHER_ARMOR: i64 = 2;
pub const RING: i64 = 3;
pub const POTION: i64 = 4;
pub const GOLD: i64 = 5;
pub const STONE: i64 = 6;

pub const STAGE_ONE: i64 = 1;
pub const STAGE_TWO: i64 = 2;

pub const SLIME: i64 = 101;
pub const GOLEM: i64 = 102;

/// Exp granted for clearing stage 1 (`SLIME` 10 exp x2).
pub const STAGE_ONE_EXP: i64 = 20;
/// Exp granted for clearing stage 2 (`SLIME` 10 exp x3 + `GOLEM` 50 exp x1).
pub const STAGE_TWO_EXP: i64 = 80;

/// Highest level of the exp table; no threshold exists past it.
pub const LEVEL_CAP: i32 = 5;

pub const PRODUCT_GOLD_PACK: i64 = 1001;
pub const PRODUCT_SWORD: i64 = 1002;

/// Base attack of `SWORD` before enhancement.
pub const SWORD_ATTACK: i64 = 10;
/// Base defence of `LEATHER_ARMOR` before enhancement.
pub const ARMOR_DEFENCE: i64 = 5;

/// Gold handed out with every new account.
pub const STARTER_GOLD: i64 = 100;

/// Returns the catalog file contents as JSON.
pub fn catalog_json() -> Value {
    json!({
        "items": [
            { "code": SWORD, "name": "Short Sword", "attribute": 1, "attack": SWORD_ATTACK, "defence": 0, "magic": 0, "enhance_max": 10 },
            { "code": LEATHER_ARMOR, "name": "Leather Armor", "attribute": 2, "attack": 0, "defence": ARMOR_DEFENCE, "magic": 0, "enhance_max": 10 },
            { "code": RING, "name": "Copper Ring", "attribute": 3, "attack": 0, "defence": 0, "magic": 3, "enhance_max": 0 },
            { "code": POTION, "name": "Small Potion", "attribute": 4, "attack": 0, "defence": 0, "magic": 0, "enhance_max": 0 },
            { "code": GOLD, "name": "Gold", "attribute": 5, "attack": 0, "defence": 0, "magic": 0, "enhance_max": 0 },
            { "code": STONE, "name": "Whetstone", "attribute": 4, "attack": 0, "defence": 0, "magic": 0, "enhance_max": 0 }
        ],
        "stage_items": [
            { "stage_code": STAGE_ONE, "item_code": POTION, "max_count": 3 },
            { "stage_code": STAGE_ONE, "item_code": GOLD, "max_count": 100 },
            { "stage_code": STAGE_TWO, "item_code": SWORD, "max_count": 1 },
            { "stage_code": STAGE_TWO, "item_code": POTION, "max_count": 2 }
        ],
        "stage_enemies": [
            { "stage_code": STAGE_ONE, "enemy_code": SLIME, "count": 2, "exp": 10 },
            { "stage_code": STAGE_TWO, "enemy_code": SLIME, "count": 3, "exp": 10 },
            { "stage_code": STAGE_TWO, "enemy_code": GOLEM, "count": 1, "exp": 50 }
        ],
        "exp_table": [
            { "level": 1, "threshold": 20 },
            { "level": 2, "threshold": 40 },
            { "level": 3, "threshold": 80 },
            { "level": 4, "threshold": 160 }
        ],
        "attendance_rewards": [
            { "day": 1, "item_code": GOLD, "count": 100 },
            { "day": 2, "item_code": POTION, "count": 2 },
            { "day": 3, "item_code": SWORD, "count": 1 }
        ],
        "in_app_products": [
            { "code": PRODUCT_GOLD_PACK, "item_code": GOLD, "count": 1000 },
            { "code": PRODUCT_GOLD_PACK, "item_code": POTION, "count": 5 },
            { "code": PRODUCT_SWORD, "item_code": SWORD, "count": 1 }
        ],
        "starter_items": [
            { "item_code": SWORD, "count": 1 },
            { "item_code": LEATHER_ARMOR, "count": 1 },
            { "item_code": POTION, "count": 1 },
            { "item_code": GOLD, "count": STARTER_GOLD }
        ]
    })
}
