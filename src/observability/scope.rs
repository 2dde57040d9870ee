//! Begin/complete logging around one unit of work
//!
//! - `{name}_BEGIN` on creation
//! - `{name}_COMPLETE` with `elapsed_ms` on `complete`
//! - `{name}_FAILED` on `fail`
//! - `{name}_INCOMPLETE` (WARN) if dropped without either

use std::time::Instant;

use super::logger::Logger;

/// A scope that logs its own start, end and duration
pub struct ObservationScope {
    name: &'static str,
    started: Instant,
    finished: bool,
}

impl ObservationScope {
    /// Open a scope; logs `{name}_BEGIN`
    pub fn begin(name: &'static str) -> Self {
        Logger::trace(&format!("{}_BEGIN", name), &[]);
        Self {
            name,
            started: Instant::now(),
            finished: false,
        }
    }

    /// Milliseconds since the scope opened
    pub fn elapsed_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    /// Close successfully; logs `{name}_COMPLETE`
    pub fn complete(mut self, fields: &[(&str, &str)]) {
        self.finished = true;
        let elapsed = self.elapsed_ms().to_string();
        let mut all: Vec<(&str, &str)> = fields.to_vec();
        all.push(("elapsed_ms", elapsed.as_str()));
        Logger::info(&format!("{}_COMPLETE", self.name), &all);
    }

    /// Close with a failure; logs `{name}_FAILED`
    pub fn fail(mut self, reason: &str) {
        self.finished = true;
        Logger::error(&format!("{}_FAILED", self.name), &[("reason", reason)]);
    }
}

impl Drop for ObservationScope {
    fn drop(&mut self) {
        if !self.finished {
            Logger::warn(
                &format!("{}_INCOMPLETE", self.name),
                &[("reason", "scope dropped without completion")],
            );
        }
    }
}
