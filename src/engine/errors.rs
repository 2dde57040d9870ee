//! # Engine Errors
//!
//! The derivation engine has a single failure class: malformed input.
//! Absent optional fields and missing override tables are never errors.

use thiserror::Error;

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Malformed input rejected by the engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("Malformed time '{0}': expected HH:MM (24-hour)")]
    MalformedTime(String),

    #[error("Malformed date '{0}': expected YYYY-MM-DD")]
    MalformedDate(String),

    #[error("Malformed hour weight '{0}': expected a positive finite number")]
    MalformedHourWeight(String),
}

impl EngineError {
    /// Stable error code string
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::MalformedTime(_) => "MYSTIC_MALFORMED_TIME",
            EngineError::MalformedDate(_) => "MYSTIC_MALFORMED_DATE",
            EngineError::MalformedHourWeight(_) => "MYSTIC_MALFORMED_HOUR_WEIGHT",
        }
    }

    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        400
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(
            EngineError::MalformedTime("x".into()).code(),
            "MYSTIC_MALFORMED_TIME"
        );
        assert_eq!(
            EngineError::MalformedDate("x".into()).code(),
            "MYSTIC_MALFORMED_DATE"
        );
    }

    #[test]
    fn test_display_names_input() {
        let err = EngineError::MalformedTime("25:00".into());
        assert!(err.to_string().contains("25:00"));
    }
}
