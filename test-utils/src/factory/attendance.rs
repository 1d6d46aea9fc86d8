use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts the attendance row for an account.
///
/// # Arguments
/// - `streak` - Consecutive attendance day reached so far
/// - `last_attended_at` - Time of the previous check-in, `None` if never checked in
pub async fn create_attendance(
    db: &DatabaseConnection,
    account_id: i64,
    streak: i32,
    last_attended_at: Option<DateTime<Utc>>,
) -> Result<entity::attendance::Model, DbErr> {
    entity::attendance::ActiveModel {
        account_id: ActiveValue::Set(account_id),
        streak: ActiveValue::Set(streak),
        last_attended_at: ActiveValue::Set(last_attended_at),
    }
    .insert(db)
    .await
}
