//! Daily attendance check-in.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    catalog::Catalog,
    data::attendance::AttendanceRepository,
    error::attendance::AttendanceError,
    model::{
        attendance::{next_attendance_day, CheckIn},
        mail::RewardMail,
    },
    service::mail::RewardMailDispatcher,
};

/// Days an attendance reward mail stays receivable.
pub const ATTENDANCE_MAIL_EXPIRY_DAYS: i64 = 7;

pub struct AttendanceService<'a> {
    db: &'a DatabaseConnection,
    catalog: &'a Catalog,
}

impl<'a> AttendanceService<'a> {
    pub fn new(db: &'a DatabaseConnection, catalog: &'a Catalog) -> Self {
        Self { db, catalog }
    }

    /// Checks the account in at `now` and mails the reward of the reached day.
    ///
    /// The streak update and the reward mail commit together.
    ///
    /// # Returns
    /// - `Ok(CheckIn)` - Day reached and the reward mail
    /// - `Err(AttendanceError::AlreadyCheckedIn)` - Already checked in on `now`'s UTC date
    /// - `Err(AttendanceError::AccountNotFound)` - Account has no attendance row
    /// - `Err(AttendanceError::NoReward)` - Catalog has no reward for the reached day
    pub async fn check_in(
        &self,
        account_id: i64,
        now: DateTime<Utc>,
    ) -> Result<CheckIn, AttendanceError> {
        let tx = self.db.begin().await?;
        let repo = AttendanceRepository::new(&tx);

        let attendance = repo
            .find(account_id)
            .await?
            .ok_or(AttendanceError::AccountNotFound(account_id))?;

        let day = next_attendance_day(
            attendance.last_attended_at,
            attendance.streak,
            now,
            self.catalog.attendance_cycle(),
        )
        .ok_or(AttendanceError::AlreadyCheckedIn)?;

        let reward = self
            .catalog
            .attendance_reward(day)
            .ok_or(AttendanceError::NoReward(day))?
            .to_vec();

        repo.record(attendance, day, now).await?;

        let mail = RewardMail::system(
            "Attendance reward",
            format!("Day {} attendance reward", day),
            reward.clone(),
            now + Duration::days(ATTENDANCE_MAIL_EXPIRY_DAYS),
        );
        let mail_id = RewardMailDispatcher::new(&tx).send(account_id, &mail).await?;

        tx.commit().await?;

        tracing::info!(account_id, day, mail_id, "Attendance checked in");

        Ok(CheckIn {
            day,
            mail_id,
            reward,
        })
    }
}
