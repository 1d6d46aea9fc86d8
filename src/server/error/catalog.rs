use thiserror::Error;

/// Master data could not be loaded.
///
/// Only raised at startup; the server refuses to start with an invalid catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Item code {0} is defined more than once")]
    DuplicateItem(i64),

    #[error("Unknown attribute {attribute} on item {item_code}")]
    UnknownAttribute { item_code: i64, attribute: i64 },

    #[error("{table} references unknown item code {item_code}")]
    UnknownItem { table: &'static str, item_code: i64 },

    #[error("{table} has a non-positive value for code {code}")]
    NonPositive { table: &'static str, code: i64 },

    #[error("Enemy {enemy_code} of stage {stage_code} has a negative exp reward")]
    NegativeExp { stage_code: i64, enemy_code: i64 },

    #[error("{table} defines code {code} more than once")]
    Duplicate { table: &'static str, code: i64 },
}
