//! Deterministic, integer-only RNG for breed and option picks.
//!
//! The engine is pure except for the intentional randomness in picking; all
//! of it flows through this one seeded stream so tests (and the CLI) can
//! reproduce a run exactly. No floating point, no OS entropy: unbiased
//! ranges via rejection sampling, weighted choice via cumulative sums.

use rand_chacha::ChaCha20Rng;
use rand_core::{RngCore, SeedableRng};

/// Seeded RNG for pick decisions.
///
/// Internally ChaCha20 with an explicit 32-byte seed derived from a 64-bit
/// seed (little-endian bytes in the first 8 positions; the rest zero). The
/// mapping is explicit to avoid endianness ambiguity across platforms.
#[derive(Debug, Clone)]
pub struct PickRng {
    rng: ChaCha20Rng,
}

impl PickRng {
    /// Construct from a 64-bit seed.
    #[inline]
    pub fn from_seed_u64(seed: u64) -> Self {
        let mut seed32 = [0u8; 32];
        seed32[..8].copy_from_slice(&seed.to_le_bytes());
        Self { rng: ChaCha20Rng::from_seed(seed32) }
    }

    /// Draw the next u64 from the stream.
    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    /// Unbiased integer in `[0, n)` using rejection sampling with the
    /// standard threshold trick. Returns `None` if `n == 0`.
    ///
    /// Let `threshold = 2^64 mod n` (computed via `wrapping_neg() % n`).
    /// Accept `x` if `x >= threshold`; then `x % n` is uniform.
    #[inline]
    pub fn below(&mut self, n: u64) -> Option<u64> {
        if n == 0 {
            return None;
        }
        let threshold = n.wrapping_neg() % n; // == (2^64 % n)
        loop {
            let x = self.next_u64();
            if x >= threshold {
                return Some(x % n);
            }
        }
    }

    /// Sample an index proportionally to `weights` (cumulative-weight
    /// sampling). Returns `None` if the slice is empty or sums to zero.
    pub fn weighted_index(&mut self, weights: &[u64]) -> Option<usize> {
        let total: u64 = weights.iter().sum();
        let mut r = self.below(total)?;
        for (i, &w) in weights.iter().enumerate() {
            if r < w {
                return Some(i);
            }
            r -= w;
        }
        // Unreachable for well-formed weights; guard against the last bucket.
        weights.iter().rposition(|&w| w > 0)
    }
}

impl Default for PickRng {
    fn default() -> Self {
        Self::from_seed_u64(0)
    }
}
