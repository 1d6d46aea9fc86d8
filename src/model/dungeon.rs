use serde::{Deserialize, Serialize};

use crate::model::item::RewardItemDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClearRecordDto {
    pub stage_code: i64,
    pub rank: i32,
    pub clear_time_ms: i64,
}

/// Stage list entry: every catalog stage with the account's record, if any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageDto {
    pub stage_code: i64,
    pub unlocked: bool,
    pub record: Option<ClearRecordDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectStageDto {
    pub stage_code: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuotaDto {
    pub code: i64,
    pub max_count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageQuotaDto {
    pub stage_code: i64,
    pub items: Vec<QuotaDto>,
    pub enemies: Vec<QuotaDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KillEnemyDto {
    pub enemy_code: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObtainItemDto {
    pub item_code: i64,
    pub count: i64,
}

/// Current progress of one tracked code after a kill or obtain event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressDto {
    pub code: i64,
    pub count: i64,
    pub max_count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClearStageDto {
    pub stage_code: i64,
    pub rank: i32,
    pub clear_time_ms: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClearResultDto {
    pub stage_code: i64,
    pub granted: Vec<RewardItemDto>,
    pub exp_gained: i64,
    pub level: i32,
    pub exp: i64,
    pub new_record: bool,
}
