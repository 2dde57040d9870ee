//! One generated numeral as kept in the history

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::engine::{DerivationMode, Numeral};
use crate::signals::SignalReport;

/// A history row: when, which numeral, and which signals were present
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub generated_at: DateTime<FixedOffset>,
    pub number: Numeral,
    #[serde(default)]
    pub mode: DerivationMode,
    pub source_health: BTreeMap<String, bool>,
}

impl HistoryEntry {
    pub fn new(
        generated_at: DateTime<FixedOffset>,
        number: Numeral,
        mode: DerivationMode,
        report: &SignalReport,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            generated_at,
            number,
            mode,
            source_health: report.health(),
        }
    }
}
