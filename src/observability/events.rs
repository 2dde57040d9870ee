//! Observable events
//!
//! Events are explicit and typed; their string form is the `event` key of a
//! log line.

use std::fmt;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Configuration loaded and validated
    ConfigLoaded,
    /// HTTP server bound and serving
    Serving,
    /// HTTP server could not start
    ServeFailed,

    // Derivation
    /// Numeral derived
    NumeralDerived,
    /// Record rejected as malformed
    DerivationRejected,

    // Signals
    /// Signal source returned usable text
    SignalFetched,
    /// Signal source failed, timed out or returned nothing
    SignalFailed,

    // History
    /// Entry appended to history
    HistoryRecorded,
    /// History write failed; generation still served
    HistoryWriteFailed,
    /// History cleared
    HistoryCleared,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::Serving => "MYSTIC_SERVING",
            Event::ServeFailed => "MYSTIC_SERVE_FAILED",
            Event::NumeralDerived => "NUMERAL_DERIVED",
            Event::DerivationRejected => "DERIVATION_REJECTED",
            Event::SignalFetched => "SIGNAL_FETCHED",
            Event::SignalFailed => "SIGNAL_FAILED",
            Event::HistoryRecorded => "HISTORY_RECORDED",
            Event::HistoryWriteFailed => "HISTORY_WRITE_FAILED",
            Event::HistoryCleared => "HISTORY_CLEARED",
        }
    }

    /// Returns true if this event indicates a fatal condition
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::ServeFailed)
    }

    /// Returns true if this event reports degraded service
    pub fn is_degraded(&self) -> bool {
        matches!(
            self,
            Event::SignalFailed | Event::HistoryWriteFailed | Event::DerivationRejected
        )
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_events_uppercase() {
        let events = [
            Event::ConfigLoaded,
            Event::Serving,
            Event::ServeFailed,
            Event::NumeralDerived,
            Event::DerivationRejected,
            Event::SignalFetched,
            Event::SignalFailed,
            Event::HistoryRecorded,
            Event::HistoryWriteFailed,
            Event::HistoryCleared,
        ];

        for event in events {
            let s = event.as_str();
            assert!(!s.is_empty());
            assert!(s.chars().all(|c| c.is_uppercase() || c == '_'));
        }
    }

    #[test]
    fn test_classification() {
        assert!(Event::ServeFailed.is_fatal());
        assert!(!Event::SignalFailed.is_fatal());
        assert!(Event::SignalFailed.is_degraded());
        assert!(!Event::NumeralDerived.is_degraded());
    }
}
