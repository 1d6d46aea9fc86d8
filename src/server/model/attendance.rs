//! Attendance streak rules.

use chrono::{DateTime, Days, Utc};

use crate::{model::attendance::AttendanceDto, server::model::item::RewardItem};

/// Outcome of a check-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckIn {
    pub day: i32,
    pub mail_id: i32,
    pub reward: Vec<RewardItem>,
}

impl CheckIn {
    pub fn into_dto(self) -> AttendanceDto {
        AttendanceDto {
            day: self.day,
            mail_id: self.mail_id,
            reward: self.reward.into_iter().map(RewardItem::into_dto).collect(),
        }
    }
}

/// Computes the attendance day reached by checking in at `now`.
///
/// The streak continues only when the previous check-in was on the UTC day before `now`
/// and the cycle has not been completed; otherwise it restarts at day 1.
///
/// # Arguments
/// - `last_attended_at` - Previous check-in, `None` if the account never checked in
/// - `streak` - Day reached by the previous check-in
/// - `now` - Time of this check-in
/// - `cycle` - Number of days in the reward cycle
///
/// # Returns
/// - `Some(day)` - Day reached by this check-in
/// - `None` - Already checked in on `now`'s UTC date
pub fn next_attendance_day(
    last_attended_at: Option<DateTime<Utc>>,
    streak: i32,
    now: DateTime<Utc>,
    cycle: i32,
) -> Option<i32> {
    let today = now.date_naive();

    let Some(last) = last_attended_at.map(|at| at.date_naive()) else {
        return Some(1);
    };

    if last >= today {
        return None;
    }

    let consecutive = today.checked_sub_days(Days::new(1)) == Some(last);
    if consecutive && streak < cycle {
        Some(streak + 1)
    } else {
        Some(1)
    }
}
