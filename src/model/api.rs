use serde::{Deserialize, Serialize};

/// Error body returned by every failing route.
///
/// `code` is a stable numeric result code clients branch on; `error` is a human readable
/// message that may change between releases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorDto {
    pub code: u16,
    pub error: String,
}
