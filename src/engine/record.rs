//! Interpretation record
//!
//! The structured input of one derivation. A record is built fresh per
//! request, consumed once by the engine and then discarded.

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::facts::{digital_root, parse_hhmm, weight_for_hour, Shio, Zodiac};

use super::errors::{EngineError, EngineResult};

/// Date format of `dateISO`
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Time format of `timeHHmm`
pub const TIME_FORMAT: &str = "%H:%M";

/// Date/time facts, labels and optional signal text for one derivation.
///
/// Field order here is the canonical field order. Serialized field names
/// match the canonical names so a record can be passed around as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterpretationRecord {
    /// Calendar date, `YYYY-MM-DD`
    #[serde(rename = "dateISO")]
    pub date_iso: String,

    /// Local time, `HH:MM`
    #[serde(rename = "timeHHmm")]
    pub time_hhmm: String,

    /// Pinned calendar year; may differ from the year in `date_iso`
    pub year: i32,

    #[serde(rename = "yearRoot")]
    pub year_root: u8,

    #[serde(rename = "dateRoot")]
    pub date_root: u8,

    #[serde(rename = "timeRoot")]
    pub time_root: u8,

    pub zodiac: Zodiac,

    pub shio: Shio,

    /// Time-of-day multiplier
    #[serde(rename = "hourWeight")]
    pub hour_weight: f64,

    /// Joined summary of secondary signals
    #[serde(
        rename = "externalSignals",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub external_signals: Option<String>,
}

impl InterpretationRecord {
    /// Assemble a record from a date/time pair, deriving roots, zodiac and
    /// hour weight.
    pub fn assemble(
        date: NaiveDate,
        time: NaiveTime,
        year: i32,
        shio: Shio,
        external_signals: Option<String>,
    ) -> Self {
        let date_iso = date.format(DATE_FORMAT).to_string();
        let time_hhmm = time.format(TIME_FORMAT).to_string();

        Self {
            year_root: digital_root(&year.to_string()),
            date_root: digital_root(&date_iso),
            time_root: digital_root(&time_hhmm),
            zodiac: Zodiac::from_date(date),
            hour_weight: weight_for_hour(time.hour()),
            date_iso,
            time_hhmm,
            year,
            shio,
            external_signals,
        }
    }

    /// Assemble a record from `YYYY-MM-DD` and `HH:MM` strings.
    pub fn from_strings(
        date_iso: &str,
        time_hhmm: &str,
        year: i32,
        shio: Shio,
        external_signals: Option<String>,
    ) -> EngineResult<Self> {
        let date = parse_date(date_iso)?;
        let (hour, minute) = parse_hhmm(time_hhmm)?;
        let time = NaiveTime::from_hms_opt(hour, minute, 0)
            .ok_or_else(|| EngineError::MalformedTime(time_hhmm.to_string()))?;

        Ok(Self::assemble(date, time, year, shio, external_signals))
    }

    /// Check the fields the engine interprets.
    pub fn validate(&self) -> EngineResult<()> {
        parse_date(&self.date_iso)?;
        parse_hhmm(&self.time_hhmm)?;

        if !self.hour_weight.is_finite() || self.hour_weight <= 0.0 {
            return Err(EngineError::MalformedHourWeight(self.hour_weight.to_string()));
        }

        Ok(())
    }
}

fn parse_date(text: &str) -> EngineResult<NaiveDate> {
    // chrono accepts unpadded fields, the canonical form does not
    if text.len() != 10 {
        return Err(EngineError::MalformedDate(text.to_string()));
    }
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .map_err(|_| EngineError::MalformedDate(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> InterpretationRecord {
        InterpretationRecord::from_strings("2025-08-15", "23:10", 2025, Shio::Ular, None).unwrap()
    }

    #[test]
    fn test_assemble_derives_facts() {
        let record = sample();
        assert_eq!(record.date_iso, "2025-08-15");
        assert_eq!(record.time_hhmm, "23:10");
        assert_eq!(record.year_root, 9);
        assert_eq!(record.date_root, digital_root("20250815"));
        assert_eq!(record.time_root, digital_root("2310"));
        assert_eq!(record.zodiac, Zodiac::Leo);
        assert_eq!(record.hour_weight, 1.5);
        assert!(record.external_signals.is_none());
    }

    #[test]
    fn test_pinned_year_independent_of_date() {
        let record =
            InterpretationRecord::from_strings("2026-01-05", "08:00", 2025, Shio::Ular, None)
                .unwrap();
        assert_eq!(record.year, 2025);
        assert_eq!(record.zodiac, Zodiac::Capricorn);
        assert!(record.date_iso.starts_with("2026"));
    }

    #[test]
    fn test_from_strings_rejects_bad_input() {
        assert_eq!(
            InterpretationRecord::from_strings("2025-13-01", "10:00", 2025, Shio::Ular, None),
            Err(EngineError::MalformedDate("2025-13-01".into()))
        );
        assert_eq!(
            InterpretationRecord::from_strings("2025-1-5", "10:00", 2025, Shio::Ular, None),
            Err(EngineError::MalformedDate("2025-1-5".into()))
        );
        assert_eq!(
            InterpretationRecord::from_strings("2025-01-05", "10h00", 2025, Shio::Ular, None),
            Err(EngineError::MalformedTime("10h00".into()))
        );
    }

    #[test]
    fn test_validate_hour_weight() {
        let mut record = sample();
        record.hour_weight = 0.0;
        assert!(matches!(
            record.validate(),
            Err(EngineError::MalformedHourWeight(_))
        ));
        record.hour_weight = f64::NAN;
        assert!(record.validate().is_err());
    }

    #[test]
    fn test_json_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["dateISO"], "2025-08-15");
        assert_eq!(json["timeHHmm"], "23:10");
        assert_eq!(json["hourWeight"], 1.5);
        assert_eq!(json["zodiac"], "Leo");
        assert!(json.get("externalSignals").is_none());
    }

    #[test]
    fn test_json_without_signals_deserializes() {
        let json = r#"{"dateISO":"2025-08-15","timeHHmm":"23:10","year":2025,
            "yearRoot":9,"dateRoot":5,"timeRoot":6,"zodiac":"Leo","shio":"Ular",
            "hourWeight":1.5}"#;
        let record: InterpretationRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record, sample());
    }
}
