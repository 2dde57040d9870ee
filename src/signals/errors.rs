//! # Signal Errors
//!
//! A signal error never fails a generation. It is reduced to an absent
//! signal plus this message.

use thiserror::Error;

/// Result type for signal fetches
pub type SignalResult<T> = Result<T, SignalError>;

/// Signal source errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignalError {
    #[error("not configured")]
    NotConfigured,

    #[error("request failed: {0}")]
    Request(String),

    #[error("HTTP status {0}")]
    Status(u16),

    #[error("timed out after {0}ms")]
    Timeout(u64),

    #[error("empty response")]
    Empty,

    #[error("client setup failed: {0}")]
    Client(String),
}

impl SignalError {
    /// Stable error code string
    pub fn code(&self) -> &'static str {
        match self {
            SignalError::NotConfigured => "MYSTIC_SIGNAL_NOT_CONFIGURED",
            SignalError::Request(_) => "MYSTIC_SIGNAL_REQUEST_FAILED",
            SignalError::Status(_) => "MYSTIC_SIGNAL_BAD_STATUS",
            SignalError::Timeout(_) => "MYSTIC_SIGNAL_TIMEOUT",
            SignalError::Empty => "MYSTIC_SIGNAL_EMPTY",
            SignalError::Client(_) => "MYSTIC_SIGNAL_CLIENT",
        }
    }
}

impl From<reqwest::Error> for SignalError {
    fn from(e: reqwest::Error) -> Self {
        SignalError::Request(e.to_string())
    }
}
