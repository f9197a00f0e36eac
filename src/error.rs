// Veriloc Errors
// Boundary-contract failures only; the pure core never errors on data quality

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScanError>;

#[derive(Debug, Error)]
pub enum ScanError {
    /// The provider payload could not be decoded at the adapter boundary.
    #[error("undecodable provider payload: {0}")]
    Payload(#[from] serde_json::Error),

    /// A raw match carried neither `text` nor `textSnippet`; only the strict
    /// adapter path surfaces this, the lenient path skips the match.
    #[error("provider match {index} has no snippet text")]
    MissingSnippet { index: usize },
}
