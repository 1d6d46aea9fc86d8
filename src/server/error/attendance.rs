use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::{error_response, internal_error_response, mail::MailError};

#[derive(Error, Debug)]
pub enum AttendanceError {
    #[error("Already checked in today")]
    AlreadyCheckedIn,

    #[error("Account {0} has no attendance record")]
    AccountNotFound(i64),

    /// The catalog defines no reward for the reached day.
    #[error("No attendance reward defined for day {0}")]
    NoReward(i32),

    #[error(transparent)]
    Mail(#[from] MailError),

    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}

impl IntoResponse for AttendanceError {
    fn into_response(self) -> Response {
        match self {
            Self::AlreadyCheckedIn => error_response(StatusCode::CONFLICT, 5001, self.to_string()),
            Self::AccountNotFound(_) => {
                error_response(StatusCode::NOT_FOUND, 5002, self.to_string())
            }
            err @ Self::NoReward(_) => internal_error_response(5003, err),
            Self::Mail(err) => err.into_response(),
            err @ Self::Database(_) => internal_error_response(5099, err),
        }
    }
}
