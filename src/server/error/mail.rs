use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::{error_response, grant::GrantError, internal_error_response};

#[derive(Error, Debug)]
pub enum MailError {
    /// Mail does not exist, belongs to another account or was deleted.
    #[error("Mail {0} not found")]
    MailNotFound(i32),

    /// Every attachment of the mail has already been received.
    #[error("Items of mail {0} were already received")]
    AlreadyReceived(i32),

    #[error("Mail {0} has expired")]
    MailExpired(i32),

    #[error("Failed to create mail record: {0}")]
    RecordInsertFailed(#[source] sea_orm::DbErr),

    #[error("Failed to attach item to mail: {0}")]
    ItemInsertFailed(#[source] sea_orm::DbErr),

    #[error("Failed to grant mail item: {0}")]
    GrantFailed(#[from] GrantError),

    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}

impl IntoResponse for MailError {
    fn into_response(self) -> Response {
        let message = self.to_string();

        match self {
            Self::MailNotFound(_) => error_response(StatusCode::NOT_FOUND, 4001, message),
            Self::AlreadyReceived(_) => error_response(StatusCode::CONFLICT, 4002, message),
            Self::MailExpired(_) => error_response(StatusCode::GONE, 4003, message),
            err @ Self::RecordInsertFailed(_) => internal_error_response(4004, err),
            err @ Self::ItemInsertFailed(_) => internal_error_response(4005, err),
            err @ Self::GrantFailed(_) => internal_error_response(4006, err),
            err @ Self::Database(_) => internal_error_response(4099, err),
        }
    }
}
