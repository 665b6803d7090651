//! Seedable random source for tile spawning.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical spawn sequences
//! - **Injectable**: Tests pass a fixed seed, games default to entropy
//!
//! ```
//! use rust_2048::core::GameRng;
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//! assert_eq!(a.gen_index(16), b.gen_index(16));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG used for cell and value choice.
///
/// Uses ChaCha8 for speed with good statistical quality.
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

    /// Create an RNG seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// Seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform index in `[0, len)`.
    ///
    /// `len` must be non-zero.
    pub fn gen_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }

    /// Uniform integer in `(0, total]`, i.e. `1..=total`.
    ///
    /// Used to pick a bucket from cumulative weights. `total` must be non-zero.
    pub fn gen_roll(&mut self, total: u64) -> u64 {
        self.inner.gen_range(1..=total)
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
            assert_eq!(rng1.gen_index(1000), rng2.gen_index(1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.gen_index(1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.gen_index(1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_roll_bounds() {
        let mut rng = GameRng::new(9);
        for _ in 0..1000 {
            let roll = rng.gen_roll(100);
            assert!((1..=100).contains(&roll));
        }
        // A single-unit range can only produce 1
        assert_eq!(rng.gen_roll(1), 1);
    }

    #[test]
    fn test_index_bounds() {
        let mut rng = GameRng::new(3);
        for _ in 0..1000 {
            assert!(rng.gen_index(5) < 5);
        }
        assert_eq!(rng.gen_index(1), 0);
    }

    #[test]
    fn test_seed_is_remembered() {
        assert_eq!(GameRng::new(1234).seed(), 1234);
    }
}
