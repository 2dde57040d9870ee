//! Per-source outcomes of one gathering round

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::errors::SignalError;
use super::source::SignalKind;

/// Character joining present excerpts
pub const SIGNAL_JOINER: &str = "-";

/// Outcome of one source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalOutcome {
    pub kind: SignalKind,
    pub present: bool,
    pub excerpt: Option<String>,
    pub error: Option<String>,
    pub elapsed_ms: u64,
}

impl SignalOutcome {
    /// Signal present with its excerpt
    pub fn present(kind: SignalKind, excerpt: String, elapsed_ms: u64) -> Self {
        Self {
            kind,
            present: true,
            excerpt: Some(excerpt),
            error: None,
            elapsed_ms,
        }
    }

    /// Signal absent with the reason
    pub fn absent(kind: SignalKind, error: &SignalError, elapsed_ms: u64) -> Self {
        Self {
            kind,
            present: false,
            excerpt: None,
            error: Some(error.to_string()),
            elapsed_ms,
        }
    }
}

/// Outcomes of one gathering round, sorted by kind
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalReport {
    outcomes: Vec<SignalOutcome>,
}

impl SignalReport {
    pub fn new(mut outcomes: Vec<SignalOutcome>) -> Self {
        outcomes.sort_by_key(|o| o.kind);
        Self { outcomes }
    }

    /// Report with no sources at all
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn outcomes(&self) -> &[SignalOutcome] {
        &self.outcomes
    }

    pub fn present_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.present).count()
    }

    /// Present excerpts joined in kind order; `None` when nothing is present
    pub fn joined(&self) -> Option<String> {
        let parts: Vec<&str> = self
            .outcomes
            .iter()
            .filter(|o| o.present)
            .filter_map(|o| o.excerpt.as_deref())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(SIGNAL_JOINER))
        }
    }

    /// `kind -> present` for every kind, absent kinds reported as false
    pub fn health(&self) -> BTreeMap<String, bool> {
        let mut health: BTreeMap<String, bool> = SignalKind::ALL
            .iter()
            .map(|k| (k.as_str().to_string(), false))
            .collect();

        for outcome in &self.outcomes {
            if outcome.present {
                health.insert(outcome.kind.as_str().to_string(), true);
            }
        }
        health
    }

    /// `kind -> error message` for failed sources
    pub fn errors(&self) -> BTreeMap<String, String> {
        self.outcomes
            .iter()
            .filter_map(|o| {
                o.error
                    .as_ref()
                    .map(|e| (o.kind.as_str().to_string(), e.clone()))
            })
            .collect()
    }
}
