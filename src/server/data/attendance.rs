use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

pub struct AttendanceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AttendanceRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an attendance row for an account that never checked in.
    pub async fn create(&self, account_id: i64) -> Result<entity::attendance::Model, DbErr> {
        entity::attendance::ActiveModel {
            account_id: ActiveValue::Set(account_id),
            streak: ActiveValue::Set(0),
            last_attended_at: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }

    pub async fn find(&self, account_id: i64) -> Result<Option<entity::attendance::Model>, DbErr> {
        entity::prelude::Attendance::find_by_id(account_id)
            .one(self.db)
            .await
    }

    /// Records a check-in reaching `streak` at `attended_at`.
    pub async fn record(
        &self,
        attendance: entity::attendance::Model,
        streak: i32,
        attended_at: DateTime<Utc>,
    ) -> Result<entity::attendance::Model, DbErr> {
        let mut active: entity::attendance::ActiveModel = attendance.into();
        active.streak = ActiveValue::Set(streak);
        active.last_attended_at = ActiveValue::Set(Some(attended_at));

        active.update(self.db).await
    }
}
