//! Time-of-day weight lookup

use crate::engine::{EngineError, EngineResult};

/// Weight for late night hours (22, 23 and 0)
pub const LATE_NIGHT_WEIGHT: f64 = 1.5;
/// Weight for evening hours (19 through 21)
pub const EVENING_WEIGHT: f64 = 1.25;
/// Weight for afternoon hours (13 through 15)
pub const AFTERNOON_WEIGHT: f64 = 0.95;
/// Weight for every other hour
pub const NEUTRAL_WEIGHT: f64 = 1.0;

/// Parses a 24-hour `HH:MM` string into `(hour, minute)`.
///
/// Both components must be exactly two ASCII digits, hour in 0..=23 and
/// minute in 0..=59.
pub fn parse_hhmm(text: &str) -> EngineResult<(u32, u32)> {
    let malformed = || EngineError::MalformedTime(text.to_string());

    let (hh, mm) = text.split_once(':').ok_or_else(malformed)?;
    let hour = two_digits(hh).ok_or_else(malformed)?;
    let minute = two_digits(mm).ok_or_else(malformed)?;

    if hour > 23 || minute > 59 {
        return Err(malformed());
    }

    Ok((hour, minute))
}

fn two_digits(part: &str) -> Option<u32> {
    if part.len() != 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

/// Step function over the hour component.
///
/// The 16..=18 band and the 1..=12 band both map to 1.0. They are kept as
/// separate arms so the table reads the same as the band definitions.
pub fn weight_for_hour(hour: u32) -> f64 {
    match hour {
        22 | 23 | 0 => LATE_NIGHT_WEIGHT,
        19..=21 => EVENING_WEIGHT,
        16..=18 => NEUTRAL_WEIGHT,
        13..=15 => AFTERNOON_WEIGHT,
        _ => NEUTRAL_WEIGHT,
    }
}

/// Weight multiplier for an `HH:MM` time string.
pub fn hour_weight(hhmm: &str) -> EngineResult<f64> {
    let (hour, _) = parse_hhmm(hhmm)?;
    Ok(weight_for_hour(hour))
}
