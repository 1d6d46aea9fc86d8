//! Dungeon run state, clear records and settlement results.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    model::dungeon::{ClearRecordDto, ClearResultDto, ProgressDto, QuotaDto, StageDto, StageQuotaDto},
    server::{catalog::StageDefinition, model::item::RewardItem},
};

/// Progress of one tracked code within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub count: i64,
    pub ceiling: i64,
}

/// One half of a run's ephemeral state: enemy kills or obtained items.
///
/// Stored as JSON under its own key. Every code the catalog defines for the stage is
/// present from the start with a zero count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunProgress {
    pub stage_code: i64,
    pub entries: BTreeMap<i64, Progress>,
}

impl RunProgress {
    /// Seeds zero progress for each (code, ceiling) pair.
    pub fn seeded(stage_code: i64, quotas: impl IntoIterator<Item = (i64, i64)>) -> Self {
        Self {
            stage_code,
            entries: quotas
                .into_iter()
                .map(|(code, ceiling)| (code, Progress { count: 0, ceiling }))
                .collect(),
        }
    }
}

/// Result of a successful clear validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClearedRun {
    pub stage_code: i64,
    /// Items obtained during the run, only codes with a positive count.
    pub items: Vec<RewardItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearRecord {
    pub stage_code: i64,
    pub rank: i32,
    pub clear_time_ms: i64,
}

impl ClearRecord {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::clear_record::Model) -> Self {
        Self {
            stage_code: entity.stage_code,
            rank: entity.rank,
            clear_time_ms: entity.clear_time_ms,
        }
    }

    pub fn into_dto(self) -> ClearRecordDto {
        ClearRecordDto {
            stage_code: self.stage_code,
            rank: self.rank,
            clear_time_ms: self.clear_time_ms,
        }
    }
}

/// Write needed to keep a stage's best clear record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordUpdate {
    /// First clear of the stage.
    Insert,
    /// Better rank: rank and time replaced.
    Rank,
    /// Same rank, faster: only time replaced.
    Time,
    /// Existing record dominates, nothing written.
    Keep,
}

impl RecordUpdate {
    /// Decides how a clear with `rank` and `clear_time_ms` affects the stored record.
    ///
    /// A higher rank always wins. At equal rank a strictly lower time wins.
    pub fn decide(existing: Option<&ClearRecord>, rank: i32, clear_time_ms: i64) -> Self {
        match existing {
            None => Self::Insert,
            Some(record) if rank > record.rank => Self::Rank,
            Some(record) if rank == record.rank && clear_time_ms < record.clear_time_ms => {
                Self::Time
            }
            Some(_) => Self::Keep,
        }
    }

    pub fn is_write(self) -> bool {
        self != Self::Keep
    }
}

/// Everything a settlement committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettlementResult {
    pub stage_code: i64,
    pub granted: Vec<RewardItem>,
    pub exp_gained: i64,
    pub level: i32,
    pub exp: i64,
    pub record_update: RecordUpdate,
}

impl SettlementResult {
    pub fn into_dto(self) -> ClearResultDto {
        ClearResultDto {
            stage_code: self.stage_code,
            granted: self.granted.into_iter().map(RewardItem::into_dto).collect(),
            exp_gained: self.exp_gained,
            level: self.level,
            exp: self.exp,
            new_record: self.record_update.is_write(),
        }
    }
}

/// Stage list entry for an account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageEntry {
    pub stage_code: i64,
    pub unlocked: bool,
    pub record: Option<ClearRecord>,
}

impl StageEntry {
    pub fn into_dto(self) -> StageDto {
        StageDto {
            stage_code: self.stage_code,
            unlocked: self.unlocked,
            record: self.record.map(ClearRecord::into_dto),
        }
    }
}

/// Converts a stage definition into the quota payload returned on selection.
pub fn stage_quota_dto(stage: &StageDefinition) -> StageQuotaDto {
    StageQuotaDto {
        stage_code: stage.code,
        items: stage
            .items
            .iter()
            .map(|(code, max_count)| QuotaDto {
                code: *code,
                max_count: *max_count,
            })
            .collect(),
        enemies: stage
            .enemies
            .iter()
            .map(|(code, enemy)| QuotaDto {
                code: *code,
                max_count: enemy.count,
            })
            .collect(),
    }
}

pub fn progress_dto(code: i64, progress: Progress) -> ProgressDto {
    ProgressDto {
        code,
        count: progress.count,
        max_count: progress.ceiling,
    }
}
