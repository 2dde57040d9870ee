//! Observability for mystic4d
//!
//! - Structured logging (JSON lines)
//! - Typed lifecycle, derivation, signal and history events
//! - Scope-based begin/complete logging
//!
//! Observability is read-only: it never changes a derivation and never
//! fails the caller.
//!
//! # Usage
//!
//! ```ignore
//! use mystic4d::observability::{Logger, Event, ObservationScope};
//!
//! Logger::info("NUMERAL_DERIVED", &[("number", "2796")]);
//!
//! let scope = ObservationScope::begin("GENERATE");
//! // ... do work ...
//! scope.complete(&[]);
//! ```

mod events;
mod logger;
mod scope;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use scope::ObservationScope;

fn severity_for(event: Event) -> Severity {
    if event.is_fatal() {
        Severity::Fatal
    } else if event.is_degraded() {
        Severity::Warn
    } else {
        Severity::Info
    }
}

/// Log a lifecycle event
pub fn log_event(event: Event) {
    log_event_with_fields(event, &[]);
}

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(severity_for(event), event.as_str(), fields);
}
