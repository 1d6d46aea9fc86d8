use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::dungeon::ClearRecord;

/// Repository for per-stage best clear records.
pub struct ClearRecordRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ClearRecordRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find(
        &self,
        account_id: i64,
        stage_code: i64,
    ) -> Result<Option<ClearRecord>, DbErr> {
        let record = entity::prelude::ClearRecord::find_by_id((account_id, stage_code))
            .one(self.db)
            .await?;

        Ok(record.map(ClearRecord::from_entity))
    }

    /// Gets every clear record of an account ordered by stage.
    pub async fn get_by_account(&self, account_id: i64) -> Result<Vec<ClearRecord>, DbErr> {
        let records = entity::prelude::ClearRecord::find()
            .filter(entity::clear_record::Column::AccountId.eq(account_id))
            .order_by_asc(entity::clear_record::Column::StageCode)
            .all(self.db)
            .await?;

        Ok(records.into_iter().map(ClearRecord::from_entity).collect())
    }

    pub async fn insert(
        &self,
        account_id: i64,
        stage_code: i64,
        rank: i32,
        clear_time_ms: i64,
    ) -> Result<ClearRecord, DbErr> {
        let record = entity::clear_record::ActiveModel {
            account_id: ActiveValue::Set(account_id),
            stage_code: ActiveValue::Set(stage_code),
            rank: ActiveValue::Set(rank),
            clear_time_ms: ActiveValue::Set(clear_time_ms),
            updated_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(ClearRecord::from_entity(record))
    }

    /// Overwrites rank and time of an existing record.
    pub async fn update(
        &self,
        account_id: i64,
        stage_code: i64,
        rank: i32,
        clear_time_ms: i64,
    ) -> Result<ClearRecord, DbErr> {
        let record = entity::clear_record::ActiveModel {
            account_id: ActiveValue::Unchanged(account_id),
            stage_code: ActiveValue::Unchanged(stage_code),
            rank: ActiveValue::Set(rank),
            clear_time_ms: ActiveValue::Set(clear_time_ms),
            updated_at: ActiveValue::Set(Utc::now()),
        }
        .update(self.db)
        .await?;

        Ok(ClearRecord::from_entity(record))
    }
}
