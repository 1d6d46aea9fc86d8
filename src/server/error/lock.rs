use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::{error_response, store::StoreError};

#[derive(Error, Debug)]
pub enum LockError {
    /// Another request for the same account is still in flight.
    ///
    /// The request is rejected rather than queued. Results in 409 Conflict.
    #[error("Account {0} already has a request in progress")]
    AlreadyLocked(i64),

    /// The lock could not be acquired because the store is unreachable.
    ///
    /// Acquisition fails closed. Results in 503 Service Unavailable.
    #[error("Failed to acquire account lock: {0}")]
    StoreUnavailable(#[source] StoreError),
}

impl IntoResponse for LockError {
    fn into_response(self) -> Response {
        match self {
            Self::AlreadyLocked(_) => error_response(
                StatusCode::CONFLICT,
                1001,
                "Another request for this account is in progress",
            ),
            Self::StoreUnavailable(err) => err.into_response(),
        }
    }
}
