use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::{error_response, internal_error_response, mail::MailError};

#[derive(Error, Debug)]
pub enum PurchaseError {
    #[error("Product {0} does not exist")]
    UnknownProduct(i64),

    /// The receipt was already redeemed, by this or another account.
    #[error("Receipt {0} was already redeemed")]
    DuplicateReceipt(String),

    #[error(transparent)]
    Mail(#[from] MailError),

    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}

impl IntoResponse for PurchaseError {
    fn into_response(self) -> Response {
        match self {
            Self::UnknownProduct(_) => error_response(StatusCode::NOT_FOUND, 6001, self.to_string()),
            Self::DuplicateReceipt(_) => {
                error_response(StatusCode::CONFLICT, 6002, self.to_string())
            }
            Self::Mail(err) => err.into_response(),
            err @ Self::Database(_) => internal_error_response(6099, err),
        }
    }
}
