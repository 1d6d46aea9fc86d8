use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

pub const STORE_UNAVAILABLE_CODE: u16 = 1101;

#[derive(Error, Debug)]
pub enum StoreError {
    /// The ephemeral store could not be reached or rejected the operation.
    ///
    /// Clients should retry later.
    #[error("Ephemeral store unavailable: {0}")]
    Unavailable(String),
}

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);

        error_response(
            StatusCode::SERVICE_UNAVAILABLE,
            STORE_UNAVAILABLE_CODE,
            "Service temporarily unavailable, please retry",
        )
    }
}
