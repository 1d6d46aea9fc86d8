use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::{error_response, internal_error_response, store::StoreError};

/// Failures of the dungeon run lifecycle.
///
/// Most variants describe invalid or stale client input and map to 4xx responses.
/// `CeilingExceeded` means the client reported more kills or loot than the stage allows,
/// which only happens with a cheating client or a progress tracking bug.
#[derive(Error, Debug)]
pub enum RunError {
    #[error("No dungeon run is in progress")]
    NoActiveRun,

    /// A run already existed when a new one was requested.
    ///
    /// The stale run has been torn down; the client may select the stage again.
    #[error("A dungeon run was already in progress and has been discarded")]
    AlreadyInProgress,

    #[error("Active run is for stage {active}, not stage {requested}")]
    StageMismatch { active: i64, requested: i64 },

    #[error("Stage {0} does not exist")]
    UnknownStage(i64),

    /// The previous stage has not been cleared yet.
    #[error("Stage {0} is locked")]
    StageLocked(i64),

    #[error("Enemy {enemy_code} does not appear in stage {stage_code}")]
    UnknownEnemy { stage_code: i64, enemy_code: i64 },

    #[error("Item {item_code} does not drop in stage {stage_code}")]
    UnknownItem { stage_code: i64, item_code: i64 },

    #[error("Obtained count must be positive, got {0}")]
    InvalidCount(i64),

    #[error("Code {code} would exceed its ceiling of {ceiling}")]
    CeilingExceeded { code: i64, ceiling: i64 },

    /// Kill counts do not exactly match the stage requirement.
    #[error("Enemy {enemy_code} killed {killed} times, stage requires {required}")]
    ClearIncomplete {
        enemy_code: i64,
        killed: i64,
        required: i64,
    },

    #[error("Invalid clear result: {0}")]
    InvalidClear(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    /// Stored run state could not be decoded.
    #[error("Corrupt run state: {0}")]
    Corrupt(#[from] serde_json::Error),
}

impl IntoResponse for RunError {
    fn into_response(self) -> Response {
        let message = self.to_string();

        match self {
            Self::NoActiveRun => error_response(StatusCode::CONFLICT, 2001, message),
            Self::AlreadyInProgress => error_response(StatusCode::CONFLICT, 2002, message),
            Self::StageMismatch { .. } => error_response(StatusCode::BAD_REQUEST, 2003, message),
            Self::UnknownStage(_) => error_response(StatusCode::NOT_FOUND, 2004, message),
            Self::StageLocked(_) => error_response(StatusCode::FORBIDDEN, 2005, message),
            Self::UnknownEnemy { .. } => error_response(StatusCode::BAD_REQUEST, 2006, message),
            Self::UnknownItem { .. } => error_response(StatusCode::BAD_REQUEST, 2007, message),
            Self::InvalidCount(_) => error_response(StatusCode::BAD_REQUEST, 2008, message),
            Self::CeilingExceeded { .. } => {
                error_response(StatusCode::UNPROCESSABLE_ENTITY, 2009, message)
            }
            Self::ClearIncomplete { .. } => error_response(StatusCode::BAD_REQUEST, 2010, message),
            Self::InvalidClear(_) => error_response(StatusCode::BAD_REQUEST, 2011, message),
            Self::Store(err) => err.into_response(),
            Self::Corrupt(err) => internal_error_response(2099, err),
        }
    }
}
