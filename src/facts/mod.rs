//! Derived facts feeding an interpretation record
//!
//! Pure helpers computed from a date/time pair before canonicalization:
//! - digital roots of the year, date and time strings
//! - the time-of-day weight multiplier
//! - the western zodiac label for a calendar date
//! - the cyclical-year (shio) label set

mod digital_root;
mod hour;
mod shio;
mod zodiac;

pub use digital_root::digital_root;
pub use hour::{hour_weight, parse_hhmm, weight_for_hour};
pub use shio::Shio;
pub use zodiac::Zodiac;
