//! Deterministic numeral derivation engine
//!
//! A pure, synchronous function of an interpretation record and an explicit
//! salt. No clock, environment or random source is read here.
//!
//! # Usage
//!
//! ```
//! use mystic4d::engine::{derive_numeral, DerivationMode, InterpretationRecord};
//! use mystic4d::facts::Shio;
//!
//! let record =
//!     InterpretationRecord::from_strings("2025-08-15", "23:10", 2025, Shio::Ular, None).unwrap();
//! let numeral = derive_numeral(&record, "", DerivationMode::Weighted).unwrap();
//! assert_eq!(numeral.as_str(), "2796");
//! ```

pub mod canonical;
pub mod derive;
pub mod errors;
pub mod prng;
pub mod record;
pub mod sampler;
pub mod seed;
pub mod weights;

pub use canonical::canonicalize;
pub use derive::{derive_numeral, Derivation, DerivationMode, Numeral, NumeralEngine, NUMERAL_LEN};
pub use errors::{EngineError, EngineResult};
pub use prng::{Mulberry32, UnitStream};
pub use record::InterpretationRecord;
pub use sampler::{sample_digit, sample_digits};
pub use seed::extract_seed;
pub use weights::{compose_weights, DigitWeights, WeightProfile, YearAdjustment};
