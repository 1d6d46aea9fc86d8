//! Ephemeral dungeon run state.
//!
//! A run is stored under two keys per account, one for enemy kills and one for obtained
//! items, each holding a JSON `RunProgress` seeded from the stage's catalog quotas. Both
//! keys expire after the run TTL so an abandoned run cleans itself up.

use std::time::Duration;

use crate::server::{
    catalog::StageDefinition,
    error::run::RunError,
    model::{
        dungeon::{ClearedRun, Progress, RunProgress},
        item::RewardItem,
    },
    store::EphemeralStore,
};

pub fn enemies_key(account_id: i64) -> String {
    format!("dungeon:{}:enemies", account_id)
}

pub fn items_key(account_id: i64) -> String {
    format!("dungeon:{}:items", account_id)
}

/// Which half of the run an event updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Track {
    Enemies,
    Items,
}

impl Track {
    fn key(self, account_id: i64) -> String {
        match self {
            Self::Enemies => enemies_key(account_id),
            Self::Items => items_key(account_id),
        }
    }
}

pub struct RunStateRepository<'a> {
    store: &'a dyn EphemeralStore,
    ttl: Duration,
}

impl<'a> RunStateRepository<'a> {
    pub fn new(store: &'a dyn EphemeralStore, ttl: Duration) -> Self {
        Self { store, ttl }
    }

    /// Starts a run of `stage` with zero progress.
    ///
    /// An existing run is treated as stale: it is deleted and `AlreadyInProgress` is
    /// returned instead of resuming it. If the second key cannot be written, the first
    /// one is deleted again so no half-created run remains.
    pub async fn start(&self, account_id: i64, stage: &StageDefinition) -> Result<(), RunError> {
        let enemies = RunProgress::seeded(
            stage.code,
            stage
                .enemies
                .iter()
                .map(|(code, enemy)| (*code, enemy.count)),
        );
        let items = RunProgress::seeded(
            stage.code,
            stage.items.iter().map(|(code, max)| (*code, *max)),
        );

        let enemies_key = enemies_key(account_id);
        let created = self
            .store
            .set_nx(&enemies_key, serde_json::to_string(&enemies)?, self.ttl)
            .await?;
        if !created {
            return Err(self.discard_stale(account_id).await);
        }

        let created = match self
            .store
            .set_nx(&items_key(account_id), serde_json::to_string(&items)?, self.ttl)
            .await
        {
            Ok(created) => created,
            Err(err) => {
                tracing::error!(
                    account_id,
                    stage_code = stage.code,
                    "Failed to write run items, rolling back run: {}",
                    err
                );
                if let Err(rollback) = self.store.delete(&enemies_key).await {
                    tracing::error!(account_id, "Failed to roll back run enemies: {}", rollback);
                }
                return Err(err.into());
            }
        };
        if !created {
            return Err(self.discard_stale(account_id).await);
        }

        tracing::info!(account_id, stage_code = stage.code, "Dungeon run started");
        Ok(())
    }

    async fn discard_stale(&self, account_id: i64) -> RunError {
        tracing::info!(account_id, "Discarding stale dungeon run");

        match self.end(account_id).await {
            Ok(()) => RunError::AlreadyInProgress,
            Err(err) => err,
        }
    }

    /// Stage of the active run, if any.
    pub async fn active_stage(&self, account_id: i64) -> Result<Option<i64>, RunError> {
        Ok(self
            .load(Track::Enemies, account_id)
            .await?
            .map(|progress| progress.stage_code))
    }

    /// Records one kill of `enemy_code`.
    ///
    /// # Returns
    /// - `Ok(Progress)` - Updated kill count
    /// - `Err(NoActiveRun | UnknownEnemy | CeilingExceeded | Store)` - State unchanged
    pub async fn record_enemy_kill(
        &self,
        account_id: i64,
        enemy_code: i64,
    ) -> Result<Progress, RunError> {
        self.increment(Track::Enemies, account_id, enemy_code, 1)
            .await
    }

    /// Records `count` units of `item_code` obtained.
    pub async fn record_item_obtain(
        &self,
        account_id: i64,
        item_code: i64,
        count: i64,
    ) -> Result<Progress, RunError> {
        if count < 1 {
            return Err(RunError::InvalidCount(count));
        }

        self.increment(Track::Items, account_id, item_code, count)
            .await
    }

    async fn increment(
        &self,
        track: Track,
        account_id: i64,
        code: i64,
        amount: i64,
    ) -> Result<Progress, RunError> {
        let Some(mut progress) = self.load(track, account_id).await? else {
            return Err(RunError::NoActiveRun);
        };
        let stage_code = progress.stage_code;

        let Some(entry) = progress.entries.get_mut(&code) else {
            return Err(match track {
                Track::Enemies => RunError::UnknownEnemy {
                    stage_code,
                    enemy_code: code,
                },
                Track::Items => RunError::UnknownItem {
                    stage_code,
                    item_code: code,
                },
            });
        };

        if entry.count + amount > entry.ceiling {
            tracing::warn!(
                account_id,
                stage_code,
                code,
                count = entry.count,
                amount,
                ceiling = entry.ceiling,
                "Run progress would exceed ceiling, possible cheating client"
            );
            return Err(RunError::CeilingExceeded {
                code,
                ceiling: entry.ceiling,
            });
        }

        entry.count += amount;
        let updated = *entry;

        self.store
            .set(
                &track.key(account_id),
                serde_json::to_string(&progress)?,
                Some(self.ttl),
            )
            .await?;

        Ok(updated)
    }

    /// Checks that the run is complete without modifying it.
    ///
    /// Every enemy's kill count must equal its required count exactly.
    ///
    /// # Returns
    /// - `Ok(ClearedRun)` - Stage code and items obtained with a positive count
    /// - `Err(NoActiveRun)` - No run, only half of it is present, or the halves disagree
    /// - `Err(ClearIncomplete)` - An enemy's kill count differs from the requirement
    pub async fn validate_clear(&self, account_id: i64) -> Result<ClearedRun, RunError> {
        let (enemies, items) = self.load_run(account_id).await?;

        check_clear(&enemies, &items)
    }

    /// Validates the run of `stage_code` and removes it so it cannot be cleared twice.
    ///
    /// The run counts as consumed once its enemies key is gone. A failure to delete the
    /// items key afterwards is only logged: without the enemies key the leftover can no
    /// longer be validated and expires with its TTL. Pass the returned `ClaimedRun` to
    /// `restore` if the rewards could not be committed.
    ///
    /// # Returns
    /// - `Ok(ClaimedRun)` - Run validated and removed from the store
    /// - `Err(NoActiveRun | ClearIncomplete)` - Run left in place
    /// - `Err(StageMismatch)` - Active run is for another stage, run left in place
    /// - `Err(Store)` - Enemies key could not be deleted, run left in place
    pub async fn claim(&self, account_id: i64, stage_code: i64) -> Result<ClaimedRun, RunError> {
        let (enemies, items) = self.load_run(account_id).await?;
        let cleared = check_clear(&enemies, &items)?;
        if cleared.stage_code != stage_code {
            return Err(RunError::StageMismatch {
                active: cleared.stage_code,
                requested: stage_code,
            });
        }

        if !self.store.delete(&enemies_key(account_id)).await? {
            return Err(RunError::NoActiveRun);
        }
        if let Err(err) = self.store.delete(&items_key(account_id)).await {
            tracing::warn!(
                account_id,
                stage_code,
                "Run claimed but its items key could not be deleted: {}",
                err
            );
        }

        Ok(ClaimedRun {
            cleared,
            enemies,
            items,
        })
    }

    /// Writes a claimed run back with a fresh TTL.
    pub async fn restore(&self, account_id: i64, claimed: &ClaimedRun) -> Result<(), RunError> {
        self.store
            .set(
                &items_key(account_id),
                serde_json::to_string(&claimed.items)?,
                Some(self.ttl),
            )
            .await?;
        self.store
            .set(
                &enemies_key(account_id),
                serde_json::to_string(&claimed.enemies)?,
                Some(self.ttl),
            )
            .await?;

        Ok(())
    }

    /// Deletes the run. Succeeds when no run exists.
    pub async fn end(&self, account_id: i64) -> Result<(), RunError> {
        self.store.delete(&enemies_key(account_id)).await?;
        self.store.delete(&items_key(account_id)).await?;

        Ok(())
    }

    async fn load_run(&self, account_id: i64) -> Result<(RunProgress, RunProgress), RunError> {
        let (Some(enemies), Some(items)) = (
            self.load(Track::Enemies, account_id).await?,
            self.load(Track::Items, account_id).await?,
        ) else {
            return Err(RunError::NoActiveRun);
        };

        if enemies.stage_code != items.stage_code {
            tracing::warn!(
                account_id,
                enemies_stage = enemies.stage_code,
                items_stage = items.stage_code,
                "Run keys belong to different stages, treating run as absent"
            );
            return Err(RunError::NoActiveRun);
        }

        Ok((enemies, items))
    }

    async fn load(&self, track: Track, account_id: i64) -> Result<Option<RunProgress>, RunError> {
        let Some(raw) = self.store.get(&track.key(account_id)).await? else {
            return Ok(None);
        };

        Ok(Some(serde_json::from_str(&raw)?))
    }
}

/// A validated run removed from the store, kept so it can be written back.
#[derive(Debug)]
pub struct ClaimedRun {
    pub cleared: ClearedRun,
    enemies: RunProgress,
    items: RunProgress,
}

fn check_clear(enemies: &RunProgress, items: &RunProgress) -> Result<ClearedRun, RunError> {
    for (enemy_code, progress) in &enemies.entries {
        if progress.count != progress.ceiling {
            return Err(RunError::ClearIncomplete {
                enemy_code: *enemy_code,
                killed: progress.count,
                required: progress.ceiling,
            });
        }
    }

    Ok(ClearedRun {
        stage_code: enemies.stage_code,
        items: items
            .entries
            .iter()
            .filter(|(_, progress)| progress.count > 0)
            .map(|(item_code, progress)| RewardItem::new(*item_code, progress.count))
            .collect(),
    })
}
