use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::{error_response, grant::GrantError, internal_error_response};

/// Failures while committing a validated run.
///
/// Settlement runs in one transaction, so every variant implies nothing was persisted.
#[derive(Error, Debug)]
pub enum SettlementError {
    #[error("Stage {0} does not exist")]
    UnknownStage(i64),

    #[error("Account {0} has no progress record")]
    AccountNotFound(i64),

    #[error("Failed to grant item {item_code}: {source}")]
    GrantFailed {
        item_code: i64,
        #[source]
        source: GrantError,
    },

    #[error("Failed to persist level and experience: {0}")]
    LevelWriteFailed(#[source] sea_orm::DbErr),

    #[error("Failed to upsert clear record: {0}")]
    ClearRecordFailed(#[source] sea_orm::DbErr),

    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}

impl IntoResponse for SettlementError {
    fn into_response(self) -> Response {
        match self {
            Self::UnknownStage(_) => error_response(StatusCode::NOT_FOUND, 3005, self.to_string()),
            Self::AccountNotFound(_) => {
                error_response(StatusCode::NOT_FOUND, 3001, self.to_string())
            }
            err @ Self::GrantFailed { .. } => internal_error_response(3002, err),
            err @ Self::LevelWriteFailed(_) => internal_error_response(3003, err),
            err @ Self::ClearRecordFailed(_) => internal_error_response(3004, err),
            err @ Self::Database(_) => internal_error_response(3099, err),
        }
    }
}
