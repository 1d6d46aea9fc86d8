//! Per-account request serialization.
//!
//! Wraps every route: the account lock is acquired before the handler runs and released
//! after the response was produced, whether the handler succeeded or failed. A second
//! request for a locked account is rejected immediately with `409` instead of waiting.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::server::{error::AppError, middleware::auth::AccountId, service::lock::RequestLock};

/// Runs the request while holding the lock of its account.
///
/// Requests without an account id are rejected before any lock is taken.
pub async fn lock_account(
    State(lock): State<RequestLock>,
    request: Request,
    next: Next,
) -> Response {
    let (parts, body) = request.into_parts();
    let account_id = match AccountId::from_parts(&parts) {
        Ok(AccountId(id)) => id,
        Err(err) => return AppError::from(err).into_response(),
    };

    let guard = match lock.acquire(account_id).await {
        Ok(guard) => guard,
        Err(err) => return err.into_response(),
    };

    let response = next.run(Request::from_parts(parts, body)).await;

    guard.release().await;

    response
}
