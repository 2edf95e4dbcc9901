//! Sheet retrieval error types

use thiserror::Error;

/// Result type for sheet operations
pub type SheetsResult<T> = std::result::Result<T, SheetsError>;

/// Errors that can occur while retrieving or reading a sheet
#[derive(Debug, Error)]
pub enum SheetsError {
    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    /// No answer within the configured timeout
    #[error("Timed out after {seconds}s fetching {url}")]
    Timeout { url: String, seconds: u64 },

    /// CSV library error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The sheet has no rows
    #[error("Sheet is empty")]
    Empty,
}
