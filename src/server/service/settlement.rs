//! Settlement of a validated dungeon run.
//!
//! Grants the obtained items, applies the stage's experience and keeps the best clear
//! record, all inside one database transaction. Any failure drops the transaction, which
//! restores every row the settlement touched.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    catalog::Catalog,
    data::{account::AccountRepository, clear_record::ClearRecordRepository},
    error::settlement::SettlementError,
    model::{
        account::apply_experience,
        dungeon::{RecordUpdate, SettlementResult},
        item::RewardItem,
    },
    service::inventory::Inventory,
};

pub struct SettlementService<'a> {
    db: &'a DatabaseConnection,
    catalog: &'a Catalog,
}

impl<'a> SettlementService<'a> {
    pub fn new(db: &'a DatabaseConnection, catalog: &'a Catalog) -> Self {
        Self { db, catalog }
    }

    /// Commits the rewards of a cleared run.
    ///
    /// Steps, in order: grant each obtained item by kind, add the stage's experience
    /// (every required enemy's exp times its required count) and level up, then insert or
    /// improve the clear record. The first clear of a stage also increments the account's
    /// cleared stage counter.
    ///
    /// # Arguments
    /// - `account_id` - Account being settled
    /// - `stage_code` - Stage that was cleared
    /// - `obtained` - Items obtained during the run
    /// - `rank` - Clear rank, higher is better
    /// - `clear_time_ms` - Completion time, lower is better at equal rank
    ///
    /// # Returns
    /// - `Ok(SettlementResult)` - Everything committed
    /// - `Err(SettlementError)` - Nothing committed
    pub async fn settle(
        &self,
        account_id: i64,
        stage_code: i64,
        obtained: &[RewardItem],
        rank: i32,
        clear_time_ms: i64,
    ) -> Result<SettlementResult, SettlementError> {
        let stage = self
            .catalog
            .stage(stage_code)
            .ok_or(SettlementError::UnknownStage(stage_code))?;

        let tx = self.db.begin().await?;

        let inventory = Inventory::new(&tx, self.catalog);
        for item in obtained {
            inventory
                .grant(account_id, *item)
                .await
                .map_err(|source| {
                    tracing::error!(
                        account_id,
                        stage_code,
                        item_code = item.item_code,
                        "Settlement grant failed, rolling back: {}",
                        source
                    );
                    SettlementError::GrantFailed {
                        item_code: item.item_code,
                        source,
                    }
                })?;
        }

        let accounts = AccountRepository::new(&tx);
        let progress = accounts
            .find(account_id)
            .await?
            .ok_or(SettlementError::AccountNotFound(account_id))?;

        let exp_gained = stage.exp_reward();
        let leveled = apply_experience(progress.level, progress.exp, exp_gained, self.catalog);
        accounts
            .set_level(progress, leveled.level, leveled.exp)
            .await
            .map_err(SettlementError::LevelWriteFailed)?;

        let records = ClearRecordRepository::new(&tx);
        let existing = records
            .find(account_id, stage_code)
            .await
            .map_err(SettlementError::ClearRecordFailed)?;
        let record_update = RecordUpdate::decide(existing.as_ref(), rank, clear_time_ms);
        match (record_update, existing) {
            (RecordUpdate::Insert, _) => {
                records
                    .insert(account_id, stage_code, rank, clear_time_ms)
                    .await
                    .map_err(SettlementError::ClearRecordFailed)?;
                accounts.increment_stages_cleared(account_id).await?;
            }
            (RecordUpdate::Rank, _) => {
                records
                    .update(account_id, stage_code, rank, clear_time_ms)
                    .await
                    .map_err(SettlementError::ClearRecordFailed)?;
            }
            (RecordUpdate::Time, Some(record)) => {
                records
                    .update(account_id, stage_code, record.rank, clear_time_ms)
                    .await
                    .map_err(SettlementError::ClearRecordFailed)?;
            }
            (RecordUpdate::Time, None) | (RecordUpdate::Keep, _) => {}
        }

        tx.commit().await?;

        tracing::info!(
            account_id,
            stage_code,
            exp_gained,
            level = leveled.level,
            "Dungeon run settled"
        );

        Ok(SettlementResult {
            stage_code,
            granted: obtained.to_vec(),
            exp_gained,
            level: leveled.level,
            exp: leveled.exp,
            record_update,
        })
    }
}
