//! Weighted digit sampling
//!
//! Draw `r = unit * total`, then walk digits 0→9 subtracting each weight
//! until `r` falls below the current digit's weight. If floating-point drift
//! leaves `r` above every weight, the last digit is returned.

use super::prng::UnitStream;
use super::weights::{DigitWeights, DIGIT_COUNT};

/// Digit returned when no digit satisfies the walk
pub const FALLBACK_DIGIT: u8 = (DIGIT_COUNT - 1) as u8;

/// Draw one digit, consuming exactly one value from `stream`.
pub fn sample_digit<S: UnitStream + ?Sized>(stream: &mut S, weights: &DigitWeights) -> u8 {
    let mut r = stream.next_unit() * weights.total();

    for (digit, &w) in weights.as_slice().iter().enumerate() {
        if r < w {
            return digit as u8;
        }
        r -= w;
    }

    FALLBACK_DIGIT
}

/// Draw `count` digits in sequence from one stream.
pub fn sample_digits<S: UnitStream + ?Sized>(
    stream: &mut S,
    weights: &DigitWeights,
    count: usize,
) -> Vec<u8> {
    (0..count).map(|_| sample_digit(stream, weights)).collect()
}
