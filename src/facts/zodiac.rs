//! Western zodiac labels and the date boundary table

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// One of the twelve western zodiac labels.
///
/// Labels are categorical inputs to the weighting model and carry no
/// further meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zodiac {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// Inclusive `(month, day)` spans for every sign except Capricorn.
///
/// Capricorn (December 22 through January 19) is the only span that wraps
/// the year boundary and covers every date not listed here.
const SPANS: [(Zodiac, (u32, u32), (u32, u32)); 11] = [
    (Zodiac::Aquarius, (1, 20), (2, 18)),
    (Zodiac::Pisces, (2, 19), (3, 20)),
    (Zodiac::Aries, (3, 21), (4, 19)),
    (Zodiac::Taurus, (4, 20), (5, 20)),
    (Zodiac::Gemini, (5, 21), (6, 20)),
    (Zodiac::Cancer, (6, 21), (7, 22)),
    (Zodiac::Leo, (7, 23), (8, 22)),
    (Zodiac::Virgo, (8, 23), (9, 22)),
    (Zodiac::Libra, (9, 23), (10, 22)),
    (Zodiac::Scorpio, (10, 23), (11, 21)),
    (Zodiac::Sagittarius, (11, 22), (12, 21)),
];

impl Zodiac {
    /// All labels in calendar order starting from Aries.
    pub const ALL: [Zodiac; 12] = [
        Zodiac::Aries,
        Zodiac::Taurus,
        Zodiac::Gemini,
        Zodiac::Cancer,
        Zodiac::Leo,
        Zodiac::Virgo,
        Zodiac::Libra,
        Zodiac::Scorpio,
        Zodiac::Sagittarius,
        Zodiac::Capricorn,
        Zodiac::Aquarius,
        Zodiac::Pisces,
    ];

    /// Label for a calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        let md = (date.month(), date.day());
        SPANS
            .iter()
            .find(|(_, start, end)| *start <= md && md <= *end)
            .map(|(sign, _, _)| *sign)
            .unwrap_or(Zodiac::Capricorn)
    }

    /// Returns the label text
    pub fn as_str(&self) -> &'static str {
        match self {
            Zodiac::Aries => "Aries",
            Zodiac::Taurus => "Taurus",
            Zodiac::Gemini => "Gemini",
            Zodiac::Cancer => "Cancer",
            Zodiac::Leo => "Leo",
            Zodiac::Virgo => "Virgo",
            Zodiac::Libra => "Libra",
            Zodiac::Scorpio => "Scorpio",
            Zodiac::Sagittarius => "Sagittarius",
            Zodiac::Capricorn => "Capricorn",
            Zodiac::Aquarius => "Aquarius",
            Zodiac::Pisces => "Pisces",
        }
    }
}

impl fmt::Display for Zodiac {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Zodiac {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Zodiac::ALL
            .iter()
            .copied()
            .find(|z| z.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown zodiac label: {}", s))
    }
}
