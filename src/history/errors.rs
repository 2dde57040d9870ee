//! # History Errors

use std::io;

use thiserror::Error;

/// Result type for history operations
pub type HistoryResult<T> = Result<T, HistoryError>;

/// History store errors
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("History I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("History file is corrupt: {0}")]
    Corrupt(String),
}

impl HistoryError {
    /// Stable error code string
    pub fn code(&self) -> &'static str {
        match self {
            HistoryError::Io(_) => "MYSTIC_HISTORY_IO",
            HistoryError::Corrupt(_) => "MYSTIC_HISTORY_CORRUPT",
        }
    }

    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        500
    }
}

impl From<serde_json::Error> for HistoryError {
    fn from(e: serde_json::Error) -> Self {
        HistoryError::Corrupt(e.to_string())
    }
}
