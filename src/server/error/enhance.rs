use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::{error_response, internal_error_response};

#[derive(Error, Debug)]
pub enum EnhanceError {
    /// Item does not exist, belongs to another account or was destroyed.
    #[error("Item {0} not found")]
    ItemNotFound(i32),

    #[error("Item code {0} cannot be enhanced")]
    NotEnhanceable(i64),

    #[error("Item {0} is already at its maximum enhancement level")]
    AlreadyMaxEnhanced(i32),

    #[error("Enhancement costs {required} but balance is {balance}")]
    NotEnoughMoney { required: i64, balance: i64 },

    #[error("Account {0} has no progress record")]
    AccountNotFound(i64),

    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}

impl IntoResponse for EnhanceError {
    fn into_response(self) -> Response {
        let message = self.to_string();

        match self {
            Self::ItemNotFound(_) => error_response(StatusCode::NOT_FOUND, 7001, message),
            Self::NotEnhanceable(_) => error_response(StatusCode::BAD_REQUEST, 7002, message),
            Self::AlreadyMaxEnhanced(_) => error_response(StatusCode::BAD_REQUEST, 7003, message),
            Self::NotEnoughMoney { .. } => error_response(StatusCode::BAD_REQUEST, 7004, message),
            Self::AccountNotFound(_) => error_response(StatusCode::NOT_FOUND, 7005, message),
            err @ Self::Database(_) => internal_error_response(7099, err),
        }
    }
}
