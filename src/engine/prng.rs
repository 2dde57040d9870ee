//! Seeded pseudorandom stream (mulberry32)
//!
//! All arithmetic is wrapping `u32`. The stream is a pure function of the
//! seed and the number of prior draws. Not cryptographically secure; use it
//! for deterministic sampling only.

/// A source of values in `[0, 1)`.
///
/// The sampler draws through this trait so a scripted stream can stand in
/// for the generator.
pub trait UnitStream {
    /// Next value in `[0, 1)`
    fn next_unit(&mut self) -> f64;
}

/// mulberry32 generator state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    /// Per-draw state increment
    pub const INCREMENT: u32 = 0x6D2B79F5;

    /// 2^32 as a float divisor
    const SCALE: f64 = 4_294_967_296.0;

    /// Create a generator whose state starts at `seed`
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Next raw 32-bit output
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(Self::INCREMENT);
        let t = self.state;
        let mut x = (t ^ (t >> 15)).wrapping_mul(t | 1);
        x ^= x.wrapping_add((x ^ (x >> 7)).wrapping_mul(x | 61));
        x ^ (x >> 14)
    }

    /// Next value in `[0, 1)`
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / Self::SCALE
    }
}

impl UnitStream for Mulberry32 {
    fn next_unit(&mut self) -> f64 {
        self.next_f64()
    }
}

impl Iterator for Mulberry32 {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_f64())
    }
}
