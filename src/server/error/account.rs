use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::{error_response, grant::GrantError, internal_error_response};

#[derive(Error, Debug)]
pub enum AccountError {
    #[error("Account {0} already exists")]
    AlreadyExists(i64),

    #[error("Account {0} not found")]
    NotFound(i64),

    /// The request did not carry a verified account id header.
    #[error("Missing or invalid account id")]
    MissingAccountId,

    #[error("Failed to grant starter item: {0}")]
    StarterGrantFailed(#[from] GrantError),
}

impl IntoResponse for AccountError {
    fn into_response(self) -> Response {
        let message = self.to_string();

        match self {
            Self::AlreadyExists(_) => error_response(StatusCode::CONFLICT, 8001, message),
            Self::NotFound(_) => error_response(StatusCode::NOT_FOUND, 8002, message),
            Self::MissingAccountId => error_response(StatusCode::UNAUTHORIZED, 8003, message),
            err @ Self::StarterGrantFailed(_) => internal_error_response(8004, err),
        }
    }
}
