use thiserror::Error;

/// Failure while adding items to an account's inventory.
#[derive(Error, Debug)]
pub enum GrantError {
    #[error("Item code {0} is not defined in the catalog")]
    UnknownItem(i64),

    #[error("Cannot grant a non-positive amount ({count}) of item {item_code}")]
    InvalidCount { item_code: i64, count: i64 },

    /// Currency grant targeted an account with no progress row.
    #[error("Account {0} has no progress record")]
    AccountNotFound(i64),

    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}
