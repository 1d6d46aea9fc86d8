use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a clear record for the account and stage.
///
/// # Arguments
/// - `db` - Database connection
/// - `account_id` - Owning account
/// - `stage_code` - Stage the record belongs to
/// - `rank` - Best rank achieved
/// - `clear_time_ms` - Best completion time for that rank
pub async fn create_clear_record(
    db: &DatabaseConnection,
    account_id: i64,
    stage_code: i64,
    rank: i32,
    clear_time_ms: i64,
) -> Result<entity::clear_record::Model, DbErr> {
    entity::clear_record::ActiveModel {
        account_id: ActiveValue::Set(account_id),
        stage_code: ActiveValue::Set(stage_code),
        rank: ActiveValue::Set(rank),
        clear_time_ms: ActiveValue::Set(clear_time_ms),
        updated_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
