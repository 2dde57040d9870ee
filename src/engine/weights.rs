//! Per-digit weight composition
//!
//! Composition order:
//! 1. Base prior (asymmetric, digits are not equally likely)
//! 2. Every digit × `hourWeight`
//! 3. Zodiac override factors (sparse)
//! 4. Shio override factors (sparse, most labels have none)
//! 5. Year adjustment table (sparse, keyed by pinned year)
//!
//! Every composition starts from the profile's constants; nothing shared is
//! mutated.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::facts::{Shio, Zodiac};

use super::record::InterpretationRecord;

/// Number of decimal digits
pub const DIGIT_COUNT: usize = 10;

/// Default base prior for digits 0 through 9
pub const BASE_PRIOR: [f64; DIGIT_COUNT] = [0.9, 1.0, 0.95, 1.0, 1.0, 1.0, 1.25, 1.1, 1.35, 1.3];

/// Sparse `(digit, factor)` multipliers
pub type Overrides = &'static [(u8, f64)];

/// Zodiac override factors
pub fn zodiac_overrides(zodiac: Zodiac) -> Overrides {
    match zodiac {
        Zodiac::Leo => &[(1, 1.2), (9, 1.15), (8, 1.1)],
        Zodiac::Virgo => &[(5, 1.15), (7, 1.15), (6, 1.05)],
        Zodiac::Libra => &[(6, 1.1), (2, 1.05), (8, 1.1)],
        Zodiac::Scorpio => &[(9, 1.12), (7, 1.1), (0, 1.02)],
        Zodiac::Sagittarius => &[(3, 1.12), (9, 1.08), (1, 1.05)],
        Zodiac::Capricorn => &[(8, 1.12), (4, 1.06), (6, 1.04)],
        Zodiac::Aquarius => &[(7, 1.12), (2, 1.06), (5, 1.04)],
        Zodiac::Pisces => &[(7, 1.1), (2, 1.05), (9, 1.05)],
        Zodiac::Aries => &[(1, 1.12), (9, 1.08), (5, 1.04)],
        Zodiac::Taurus => &[(6, 1.1), (8, 1.06), (4, 1.04)],
        Zodiac::Gemini => &[(3, 1.12), (5, 1.06), (2, 1.04)],
        Zodiac::Cancer => &[(2, 1.08), (6, 1.06), (9, 1.02)],
    }
}

/// Shio override factors; labels without a table return an empty slice
pub fn shio_overrides(shio: Shio) -> Overrides {
    match shio {
        Shio::Ular => &[(6, 1.2), (8, 1.2), (9, 1.15)],
        Shio::Naga => &[(8, 1.15), (9, 1.1), (3, 1.05)],
        Shio::Ayam => &[(4, 1.1), (7, 1.1), (6, 1.05)],
        Shio::Macan => &[(1, 1.08), (3, 1.06), (9, 1.04)],
        Shio::Kelinci => &[(2, 1.08), (6, 1.06), (8, 1.02)],
        _ => &[],
    }
}

/// A one-off boost applied when the record's pinned year matches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearAdjustment {
    pub year: i32,
    pub digit: u8,
    pub factor: f64,
}

/// Year-keyed adjustments. 2025 nudges digit 9 by 10%.
pub const YEAR_ADJUSTMENTS: &[YearAdjustment] = &[YearAdjustment {
    year: 2025,
    digit: 9,
    factor: 1.1,
}];

/// Composed weights for digits 0 through 9
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DigitWeights([f64; DIGIT_COUNT]);

impl DigitWeights {
    /// Wrap raw weights
    pub fn new(weights: [f64; DIGIT_COUNT]) -> Self {
        Self(weights)
    }

    /// Weight of one digit (0..=9)
    pub fn get(&self, digit: u8) -> f64 {
        self.0[usize::from(digit)]
    }

    /// Weights in ascending digit order
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Sum over all ten digits, accumulated in ascending order
    pub fn total(&self) -> f64 {
        self.0.iter().fold(0.0, |acc, w| acc + w)
    }

    /// Share of the total held by `digit`
    pub fn probability(&self, digit: u8) -> f64 {
        self.get(digit) / self.total()
    }

    fn scale_all(&mut self, factor: f64) {
        for w in self.0.iter_mut() {
            *w *= factor;
        }
    }

    fn apply(&mut self, overrides: &[(u8, f64)]) {
        for &(digit, factor) in overrides {
            if let Some(w) = self.0.get_mut(usize::from(digit)) {
                *w *= factor;
            }
        }
    }
}

impl fmt::Display for DigitWeights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (digit, w) in self.0.iter().enumerate() {
            if digit > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}={:.4}", digit, w)?;
        }
        Ok(())
    }
}

/// Base prior plus year table; the tunable half of the weighting model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightProfile {
    pub base: [f64; DIGIT_COUNT],
    pub year_adjustments: Vec<YearAdjustment>,
}

impl Default for WeightProfile {
    fn default() -> Self {
        Self {
            base: BASE_PRIOR,
            year_adjustments: YEAR_ADJUSTMENTS.to_vec(),
        }
    }
}

impl WeightProfile {
    /// Profile with a custom base prior and the standard year table
    pub fn with_base(base: [f64; DIGIT_COUNT]) -> Self {
        Self {
            base,
            ..Self::default()
        }
    }

    /// Compose the weights for one record.
    pub fn compose(&self, record: &InterpretationRecord) -> DigitWeights {
        let mut weights = DigitWeights::new(self.base);

        weights.scale_all(record.hour_weight);
        weights.apply(zodiac_overrides(record.zodiac));
        weights.apply(shio_overrides(record.shio));

        for adj in self.year_adjustments.iter().filter(|a| a.year == record.year) {
            weights.apply(&[(adj.digit, adj.factor)]);
        }

        weights
    }
}

/// Compose with the default profile.
pub fn compose_weights(record: &InterpretationRecord) -> DigitWeights {
    WeightProfile::default().compose(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> InterpretationRecord {
        InterpretationRecord::from_strings("2025-08-15", "23:10", 2025, Shio::Ular, None).unwrap()
    }

    #[test]
    fn test_reference_composition() {
        let weights = compose_weights(&sample());
        let expected = [
            1.35,
            1.7999999999999998,
            1.4249999999999998,
            1.5,
            1.5,
            1.5,
            2.25,
            1.6500000000000001,
            2.6730000000000005,
            2.8367625000000003,
        ];
        assert_eq!(weights.as_slice(), &expected);
    }

    #[test]
    fn test_base_not_mutated() {
        let _ = compose_weights(&sample());
        assert_eq!(BASE_PRIOR[9], 1.3);
        assert_eq!(WeightProfile::default().base, BASE_PRIOR);
    }

    #[test]
    fn test_shio_without_table_is_neutral() {
        let mut record = sample();
        record.shio = Shio::Kuda;
        record.year = 2030;
        record.hour_weight = 1.0;
        record.zodiac = Zodiac::Leo;
        let weights = compose_weights(&record);

        assert_eq!(weights.get(0), 0.9);
        assert_eq!(weights.get(6), 1.25);
        assert_eq!(weights.get(1), 1.0 * 1.2);
    }

    #[test]
    fn test_year_adjustment_only_for_listed_year() {
        let mut record = sample();
        let with_boost = compose_weights(&record).get(9);
        record.year = 2026;
        let without = compose_weights(&record).get(9);
        assert!((with_boost / without - 1.1).abs() < 1e-12);
    }

    #[test]
    fn test_every_zodiac_has_three_overrides() {
        for z in Zodiac::ALL {
            let overrides = zodiac_overrides(z);
            assert_eq!(overrides.len(), 3, "{}", z);
            assert!(overrides.iter().all(|(d, f)| *d < 10 && *f > 1.0));
        }
    }

    #[test]
    fn test_all_weights_positive() {
        for z in Zodiac::ALL {
            for s in Shio::ALL {
                let mut record = sample();
                record.zodiac = z;
                record.shio = s;
                let weights = compose_weights(&record);
                assert!(weights.as_slice().iter().all(|w| *w > 0.0));
            }
        }
    }

    #[test]
    fn test_custom_base() {
        let profile = WeightProfile::with_base([1.0; DIGIT_COUNT]);
        let mut record = sample();
        record.shio = Shio::Babi;
        record.zodiac = Zodiac::Cancer;
        record.hour_weight = 1.0;
        record.year = 1999;
        let weights = profile.compose(&record);
        assert_eq!(weights.get(0), 1.0);
        assert_eq!(weights.get(2), 1.08);
    }
}
