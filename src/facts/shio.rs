//! Cyclical-year labels

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the twelve cyclical-year (shio) labels.
///
/// Always supplied by the caller; no year rotation happens here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shio {
    Tikus,
    Kerbau,
    Macan,
    Kelinci,
    Naga,
    Ular,
    Kuda,
    Kambing,
    Monyet,
    Ayam,
    Anjing,
    Babi,
}

impl Shio {
    /// All labels in cycle order
    pub const ALL: [Shio; 12] = [
        Shio::Tikus,
        Shio::Kerbau,
        Shio::Macan,
        Shio::Kelinci,
        Shio::Naga,
        Shio::Ular,
        Shio::Kuda,
        Shio::Kambing,
        Shio::Monyet,
        Shio::Ayam,
        Shio::Anjing,
        Shio::Babi,
    ];

    /// Returns the label text
    pub fn as_str(&self) -> &'static str {
        match self {
            Shio::Tikus => "Tikus",
            Shio::Kerbau => "Kerbau",
            Shio::Macan => "Macan",
            Shio::Kelinci => "Kelinci",
            Shio::Naga => "Naga",
            Shio::Ular => "Ular",
            Shio::Kuda => "Kuda",
            Shio::Kambing => "Kambing",
            Shio::Monyet => "Monyet",
            Shio::Ayam => "Ayam",
            Shio::Anjing => "Anjing",
            Shio::Babi => "Babi",
        }
    }
}

impl fmt::Display for Shio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Shio {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Shio::ALL
            .iter()
            .copied()
            .find(|label| label.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown shio label: {}", s))
    }
}
