//! Deterministic random number generation.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Context streams**: Independent sequences for different purposes
//!
//! A session owns one `GameRng` and derives independent streams from it,
//! so card generation and number drawing never perturb each other's
//! sequences:
//!
//! ```
//! use bingo_engine::core::GameRng;
//!
//! let rng = GameRng::new(42);
//! let mut card_rng = rng.for_context("card");
//! let mut draw_rng = rng.for_context("draw");
//!
//! // Same seed + same context = same stream, every time.
//! let again = GameRng::new(42).for_context("card").gen_range_u8(1..=75);
//! assert_eq!(card_rng.gen_range_u8(1..=75), again);
//! # let _ = draw_rng.gen_range_u8(1..=75);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hash::{Hash, Hasher};

/// Deterministic RNG for card generation and draw sequencing.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality randomness.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an independent stream for a specific context.
    ///
    /// Useful for separating randomness domains (e.g., card layout vs draws).
    /// The same context always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        let context_seed = hasher.finish();

        Self {
            inner: ChaCha8Rng::seed_from_u64(context_seed),
            seed: context_seed,
        }
    }

    /// Generate a random number in the given inclusive range.
    pub fn gen_range_u8(&mut self, range: std::ops::RangeInclusive<u8>) -> u8 {
        self.inner.gen_range(range)
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_range_u8(1..=75), rng2.gen_range_u8(1..=75));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.gen_range_u8(1..=75)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.gen_range_u8(1..=75)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_context_produces_different_sequence() {
        let rng = GameRng::new(42);
        let mut ctx1 = rng.for_context("card");
        let mut ctx2 = rng.for_context("draw");

        let seq1: Vec<_> = (0..10).map(|_| ctx1.gen_range_u8(1..=75)).collect();
        let seq2: Vec<_> = (0..10).map(|_| ctx2.gen_range_u8(1..=75)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_context_is_deterministic() {
        let rng1 = GameRng::new(42);
        let rng2 = GameRng::new(42);

        let mut ctx1 = rng1.for_context("card");
        let mut ctx2 = rng2.for_context("card");

        for _ in 0..10 {
            assert_eq!(ctx1.gen_range_u8(1..=75), ctx2.gen_range_u8(1..=75));
        }
    }

    #[test]
    fn test_range_bounds() {
        let mut rng = GameRng::new(7);
        for _ in 0..1000 {
            let n = rng.gen_range_u8(16..=30);
            assert!((16..=30).contains(&n));
        }
    }
}
