//! Numeral derivation
//!
//! record → canonical form → SHA-256 → 32-bit seed → mulberry32 stream →
//! composed weights → four weighted draws.
//!
//! In unweighted mode the numeral is `seed mod 10000`, zero-padded, and no
//! weights are composed.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::canonical::canonicalize;
use super::errors::EngineResult;
use super::prng::Mulberry32;
use super::record::InterpretationRecord;
use super::sampler::sample_digits;
use super::seed::{digest, format_digest, seed_from_digest};
use super::weights::{DigitWeights, WeightProfile};

/// Digits per numeral
pub const NUMERAL_LEN: usize = 4;

/// How digits are drawn from the seed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DerivationMode {
    /// Four weighted draws from the seeded stream
    #[default]
    Weighted,
    /// `seed mod 10000`
    Unweighted,
}

impl DerivationMode {
    /// Mode from the boolean `weighted` flag
    pub fn from_weighted(weighted: bool) -> Self {
        if weighted {
            DerivationMode::Weighted
        } else {
            DerivationMode::Unweighted
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DerivationMode::Weighted => "weighted",
            DerivationMode::Unweighted => "unweighted",
        }
    }
}

/// A 4-character, zero-padded decimal string
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Numeral(String);

impl Numeral {
    fn from_digits(digits: &[u8]) -> Self {
        Self(digits.iter().map(|d| char::from(b'0' + d)).collect())
    }

    fn from_seed(seed: u32) -> Self {
        Self(format!("{:04}", seed % 10_000))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Every intermediate of one derivation, for explain output and audit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Derivation {
    pub mode: DerivationMode,
    pub canonical: String,
    pub digest_hex: String,
    pub seed: u32,
    /// Absent in unweighted mode
    pub weights: Option<DigitWeights>,
    pub numeral: Numeral,
}

/// Derivation engine bound to a weight profile.
///
/// Holds no mutable state; one engine may serve any number of concurrent
/// callers.
#[derive(Debug, Clone, Default)]
pub struct NumeralEngine {
    profile: WeightProfile,
}

impl NumeralEngine {
    /// Engine with the default weight profile
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with a custom weight profile
    pub fn with_profile(profile: WeightProfile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &WeightProfile {
        &self.profile
    }

    /// Derive a numeral, keeping every intermediate.
    ///
    /// # Errors
    ///
    /// Returns `EngineError` if the record's date, time or hour weight is
    /// malformed. Absent signals are never an error.
    pub fn derive(
        &self,
        record: &InterpretationRecord,
        salt: &str,
        mode: DerivationMode,
    ) -> EngineResult<Derivation> {
        record.validate()?;

        let canonical = canonicalize(record, salt);
        let digest = digest(canonical.as_bytes());
        let seed = seed_from_digest(&digest);

        let (weights, numeral) = match mode {
            DerivationMode::Unweighted => (None, Numeral::from_seed(seed)),
            DerivationMode::Weighted => {
                let mut rng = Mulberry32::new(seed);
                let weights = self.profile.compose(record);
                let digits = sample_digits(&mut rng, &weights, NUMERAL_LEN);
                (Some(weights), Numeral::from_digits(&digits))
            }
        };

        Ok(Derivation {
            mode,
            canonical,
            digest_hex: format_digest(&digest),
            seed,
            weights,
            numeral,
        })
    }
}

/// Derive a numeral with the default weight profile.
pub fn derive_numeral(
    record: &InterpretationRecord,
    salt: &str,
    mode: DerivationMode,
) -> EngineResult<Numeral> {
    NumeralEngine::new()
        .derive(record, salt, mode)
        .map(|d| d.numeral)
}
