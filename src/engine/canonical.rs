//! Canonical form of an interpretation record
//!
//! Format:
//!
//! ```text
//! dateISO:<v>,timeHHmm:<v>,year:<v>,yearRoot:<v>,dateRoot:<v>,timeRoot:<v>,
//! zodiac:<v>,shio:<v>,hourWeight:<v>[,externalSignals:<v>]|<salt>
//! ```
//!
//! (shown wrapped; the real form is a single line)
//!
//! - Field order is fixed here, not by any serializer
//! - `externalSignals` is omitted entirely when absent
//! - Values are emitted verbatim, without escaping
//! - Numbers use the shortest round-trip decimal form (`1.5`, `1`, `0.95`)

use std::fmt::Write;

use super::record::InterpretationRecord;

/// Separates a field name from its value
pub const NAME_SEPARATOR: char = ':';
/// Separates consecutive fields
pub const FIELD_SEPARATOR: char = ',';
/// Separates the record from the salt
pub const SALT_SEPARATOR: char = '|';

/// Serialize a record and salt into the hash input.
pub fn canonicalize(record: &InterpretationRecord, salt: &str) -> String {
    let mut out = String::with_capacity(160 + salt.len());

    push_field(&mut out, "dateISO", &record.date_iso);
    push_field(&mut out, "timeHHmm", &record.time_hhmm);
    push_field(&mut out, "year", record.year);
    push_field(&mut out, "yearRoot", record.year_root);
    push_field(&mut out, "dateRoot", record.date_root);
    push_field(&mut out, "timeRoot", record.time_root);
    push_field(&mut out, "zodiac", record.zodiac);
    push_field(&mut out, "shio", record.shio);
    push_field(&mut out, "hourWeight", record.hour_weight);
    if let Some(ref signals) = record.external_signals {
        push_field(&mut out, "externalSignals", signals);
    }

    out.push(SALT_SEPARATOR);
    out.push_str(salt);
    out
}

fn push_field(out: &mut String, name: &str, value: impl std::fmt::Display) {
    if !out.is_empty() {
        out.push(FIELD_SEPARATOR);
    }
    // Writing into a String cannot fail
    let _ = write!(out, "{}{}{}", name, NAME_SEPARATOR, value);
}
