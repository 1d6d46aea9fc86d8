use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::account::AccountDto,
    server::{
        error::AppError, middleware::auth::AccountId, service::account::AccountService,
        state::AppState,
    },
};

/// Create the account of the requesting id.
///
/// Inserts the progress row and attendance row and grants the starter items.
///
/// # Returns
/// - `201 Created` - Account with its starter items
/// - `409 Conflict` - Account already exists
/// - `500 Internal Server Error` - Database error
pub async fn create_account(
    State(state): State<AppState>,
    AccountId(account_id): AccountId,
) -> Result<impl IntoResponse, AppError> {
    let account = AccountService::new(&state.db, &state.catalog)
        .create(account_id)
        .await?;

    Ok((StatusCode::CREATED, Json(account.into_dto())))
}

/// Get the account's progress and items.
///
/// # Returns
/// - `200 OK` - Account progress and live items
/// - `404 Not Found` - Account does not exist
pub async fn get_account(
    State(state): State<AppState>,
    AccountId(account_id): AccountId,
) -> Result<Json<AccountDto>, AppError> {
    let account = AccountService::new(&state.db, &state.catalog)
        .load(account_id)
        .await?;

    Ok(Json(account.into_dto()))
}
