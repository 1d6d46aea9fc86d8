//! Dungeon run lifecycle: stage selection, progress reporting and clearing.

use std::{collections::HashMap, time::Duration};

use sea_orm::DatabaseConnection;

use crate::server::{
    catalog::{Catalog, StageDefinition},
    data::{
        account::AccountRepository, clear_record::ClearRecordRepository,
        run_state::RunStateRepository,
    },
    error::{account::AccountError, run::RunError, AppError},
    model::dungeon::{Progress, SettlementResult, StageEntry},
    service::settlement::SettlementService,
    store::EphemeralStore,
};

pub struct DungeonService<'a> {
    db: &'a DatabaseConnection,
    catalog: &'a Catalog,
    runs: RunStateRepository<'a>,
}

impl<'a> DungeonService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        catalog: &'a Catalog,
        store: &'a dyn EphemeralStore,
        run_ttl: Duration,
    ) -> Self {
        Self {
            db,
            catalog,
            runs: RunStateRepository::new(store, run_ttl),
        }
    }

    /// Lists every catalog stage with its unlock state and the account's best record.
    ///
    /// A stage is unlocked when it has no required stage or the required stage has a
    /// clear record.
    pub async fn list_stages(&self, account_id: i64) -> Result<Vec<StageEntry>, AppError> {
        let records: HashMap<i64, _> = ClearRecordRepository::new(self.db)
            .get_by_account(account_id)
            .await?
            .into_iter()
            .map(|record| (record.stage_code, record))
            .collect();

        Ok(self
            .catalog
            .stages()
            .map(|stage| StageEntry {
                stage_code: stage.code,
                unlocked: self
                    .catalog
                    .required_stage(stage.code)
                    .is_none_or(|required| records.contains_key(&required)),
                record: records.get(&stage.code).copied(),
            })
            .collect())
    }

    /// Starts a run of `stage_code`.
    ///
    /// # Returns
    /// - `Ok(&StageDefinition)` - Run started, quotas for the client
    /// - `Err(AccountError::NotFound)` - Account does not exist
    /// - `Err(RunError::UnknownStage)` - Stage not in the catalog
    /// - `Err(RunError::StageLocked)` - Required stage not cleared yet
    /// - `Err(RunError::AlreadyInProgress)` - A stale run existed and was discarded
    pub async fn select_stage(
        &self,
        account_id: i64,
        stage_code: i64,
    ) -> Result<&'a StageDefinition, AppError> {
        if AccountRepository::new(self.db)
            .find(account_id)
            .await?
            .is_none()
        {
            return Err(AccountError::NotFound(account_id).into());
        }

        let stage = self
            .catalog
            .stage(stage_code)
            .ok_or(RunError::UnknownStage(stage_code))?;

        if let Some(required) = self.catalog.required_stage(stage_code) {
            let cleared = ClearRecordRepository::new(self.db)
                .find(account_id, required)
                .await?
                .is_some();
            if !cleared {
                return Err(RunError::StageLocked(stage_code).into());
            }
        }

        self.runs.start(account_id, stage).await?;

        tracing::debug!(account_id, stage_code, "Dungeon run started");

        Ok(stage)
    }

    pub async fn kill_enemy(&self, account_id: i64, enemy_code: i64) -> Result<Progress, AppError> {
        Ok(self.runs.record_enemy_kill(account_id, enemy_code).await?)
    }

    pub async fn obtain_item(
        &self,
        account_id: i64,
        item_code: i64,
        count: i64,
    ) -> Result<Progress, AppError> {
        Ok(self
            .runs
            .record_item_obtain(account_id, item_code, count)
            .await?)
    }

    /// Validates the active run, settles it and ends it.
    ///
    /// The run is claimed, which removes it from the store, before the settlement
    /// transaction starts, so a committed settlement can never be replayed by a retry. If
    /// the settlement fails, the run is written back so the client can retry the clear.
    ///
    /// # Returns
    /// - `Ok(SettlementResult)` - Rewards committed, run gone
    /// - `Err(RunError::InvalidClear)` - Rank below 1 or negative clear time
    /// - `Err(RunError::NoActiveRun | ClearIncomplete | StageMismatch)` - Run not clearable
    /// - `Err(RunError::Store)` - Run could not be claimed, nothing committed
    /// - `Err(SettlementError)` - Nothing committed, run restored
    pub async fn clear_stage(
        &self,
        account_id: i64,
        stage_code: i64,
        rank: i32,
        clear_time_ms: i64,
    ) -> Result<SettlementResult, AppError> {
        if rank < 1 {
            return Err(
                RunError::InvalidClear(format!("rank must be at least 1, got {}", rank)).into(),
            );
        }
        if clear_time_ms < 0 {
            return Err(RunError::InvalidClear(format!(
                "clear time must not be negative, got {}",
                clear_time_ms
            ))
            .into());
        }

        let claimed = self.runs.claim(account_id, stage_code).await?;

        let settled = SettlementService::new(self.db, self.catalog)
            .settle(
                account_id,
                stage_code,
                &claimed.cleared.items,
                rank,
                clear_time_ms,
            )
            .await;

        match settled {
            Ok(result) => Ok(result),
            Err(err) => {
                if let Err(restore) = self.runs.restore(account_id, &claimed).await {
                    tracing::error!(
                        account_id,
                        stage_code,
                        "Settlement failed and the run could not be restored: {}",
                        restore
                    );
                }
                Err(err.into())
            }
        }
    }

    /// Abandons the active run without rewards. Succeeds when no run exists.
    pub async fn abort_stage(&self, account_id: i64) -> Result<(), AppError> {
        Ok(self.runs.end(account_id).await?)
    }
}
