use axum::{extract::State, Json};
use chrono::Utc;

use crate::{
    model::attendance::AttendanceDto,
    server::{
        error::AppError, middleware::auth::AccountId, service::attendance::AttendanceService,
        state::AppState,
    },
};

/// Check in for today and receive the day's reward by mail.
///
/// # Returns
/// - `200 OK` - Day reached and the reward mail id
/// - `404 Not Found` - Account has no attendance record
/// - `409 Conflict` - Already checked in today
pub async fn check_in(
    State(state): State<AppState>,
    AccountId(account_id): AccountId,
) -> Result<Json<AttendanceDto>, AppError> {
    let check_in = AttendanceService::new(&state.db, &state.catalog)
        .check_in(account_id, Utc::now())
        .await?;

    Ok(Json(check_in.into_dto()))
}
