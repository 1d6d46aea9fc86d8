//! Account identity of a request.
//!
//! The upstream session layer verifies the client's token and stamps the account id on
//! the request in the `x-account-id` header. Handlers and the request lock read it
//! through the `AccountId` extractor; a request without a valid header is rejected.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::server::error::{account::AccountError, AppError};

pub const ACCOUNT_ID_HEADER: &str = "x-account-id";

/// Verified account id of the current request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountId(pub i64);

impl AccountId {
    /// Reads the account id header from request parts.
    ///
    /// # Returns
    /// - `Ok(AccountId)` - Header present and a valid positive integer
    /// - `Err(AccountError::MissingAccountId)` - Header absent or malformed
    pub fn from_parts(parts: &Parts) -> Result<Self, AccountError> {
        parts
            .headers
            .get(ACCOUNT_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse::<i64>().ok())
            .filter(|id| *id > 0)
            .map(Self)
            .ok_or(AccountError::MissingAccountId)
    }
}

impl<S> FromRequestParts<S> for AccountId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_parts(parts)?)
    }
}
