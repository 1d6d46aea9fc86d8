//! Error types and HTTP response handling.
//!
//! Each layer owns a `thiserror` enum describing its failures. `AppError` aggregates them
//! through `#[from]` conversions and implements `IntoResponse`, so handlers can use `?`
//! end to end. Every response carries a stable numeric result code in `ErrorDto` so
//! clients can tell invalid or stale input (4xx) apart from "retry later" (503) and from
//! conditions that indicate a cheating client or a tracking bug (422).

pub mod account;
pub mod attendance;
pub mod catalog;
pub mod config;
pub mod enhance;
pub mod grant;
pub mod lock;
pub mod mail;
pub mod purchase;
pub mod run;
pub mod settlement;
pub mod store;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        account::AccountError, attendance::AttendanceError, catalog::CatalogError,
        config::ConfigError, enhance::EnhanceError, lock::LockError, mail::MailError,
        purchase::PurchaseError, run::RunError, settlement::SettlementError, store::StoreError,
    },
};

/// Result code for failures that carry no more specific code.
pub const INTERNAL_ERROR_CODE: u16 = 9000;
const DATABASE_ERROR_CODE: u16 = 9001;
const BAD_REQUEST_CODE: u16 = 9002;

/// Top-level application error type.
///
/// Domain variants delegate to their own `IntoResponse` implementation for status and
/// result code mapping. Generic variants provide standard HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Master data failed to load or validate at startup.
    #[error(transparent)]
    CatalogErr(#[from] CatalogError),

    /// Ephemeral store failure outside of a more specific layer.
    #[error(transparent)]
    StoreErr(#[from] StoreError),

    #[error(transparent)]
    LockErr(#[from] LockError),

    #[error(transparent)]
    RunErr(#[from] RunError),

    #[error(transparent)]
    SettlementErr(#[from] SettlementError),

    #[error(transparent)]
    MailErr(#[from] MailError),

    #[error(transparent)]
    AttendanceErr(#[from] AttendanceError),

    #[error(transparent)]
    PurchaseErr(#[from] PurchaseError),

    #[error(transparent)]
    EnhanceErr(#[from] EnhanceError),

    #[error(transparent)]
    AccountErr(#[from] AccountError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Failed to bind or serve the HTTP listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - Variable - For domain variants, delegated to the wrapped error's `into_response()`
/// - 400 Bad Request - For `BadRequest` variant
/// - 500 Internal Server Error - For database, I/O, configuration and internal errors
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::StoreErr(err) => err.into_response(),
            Self::LockErr(err) => err.into_response(),
            Self::RunErr(err) => err.into_response(),
            Self::SettlementErr(err) => err.into_response(),
            Self::MailErr(err) => err.into_response(),
            Self::AttendanceErr(err) => err.into_response(),
            Self::PurchaseErr(err) => err.into_response(),
            Self::EnhanceErr(err) => err.into_response(),
            Self::AccountErr(err) => err.into_response(),
            Self::BadRequest(msg) => error_response(StatusCode::BAD_REQUEST, BAD_REQUEST_CODE, msg),
            Self::DbErr(err) => internal_error_response(DATABASE_ERROR_CODE, err),
            err => internal_error_response(INTERNAL_ERROR_CODE, err),
        }
    }
}

/// Builds a JSON error response with the given status and result code.
pub fn error_response(status: StatusCode, code: u16, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            code,
            error: message.into(),
        }),
    )
        .into_response()
}

/// Logs the error and returns a 500 response with a generic message.
///
/// The detailed message stays in the server logs to avoid leaking internals to clients.
pub fn internal_error_response(code: u16, err: impl std::fmt::Display) -> Response {
    tracing::error!(code, "{}", err);

    error_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        code,
        "Internal server error",
    )
}
