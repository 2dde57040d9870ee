//! SHA-256 digest and 32-bit seed extraction
//!
//! The seed is the first 8 digest bytes read as a big-endian `u64`, then
//! reduced modulo 2^32. Any other byte window or bit width changes every
//! downstream numeral.

use sha2::{Digest, Sha256};

/// Number of digest bytes folded into the intermediate integer
pub const SEED_PREFIX_LEN: usize = 8;

/// Computes the SHA-256 digest of the canonical bytes.
pub fn digest(canonical: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(canonical);
    hasher.finalize().into()
}

/// Reduces a digest to the 32-bit seed.
pub fn seed_from_digest(digest: &[u8; 32]) -> u32 {
    let mut prefix = [0u8; SEED_PREFIX_LEN];
    prefix.copy_from_slice(&digest[..SEED_PREFIX_LEN]);
    let wide = u64::from_be_bytes(prefix);
    (wide % (1u64 << 32)) as u32
}

/// Digest and reduce in one step.
///
/// This function is deterministic: the same input always produces the same seed.
pub fn extract_seed(canonical: &[u8]) -> u32 {
    seed_from_digest(&digest(canonical))
}

/// Formats a digest as lowercase hex.
pub fn format_digest(digest: &[u8; 32]) -> String {
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}
