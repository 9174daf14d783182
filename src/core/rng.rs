//! Deterministic random number generation for deck shuffling.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the identical deck order
//! - **Injectable**: Implements `RngCore`, so anything generic over
//!   `rand::Rng` (including `Deck::generate`) accepts it
//! - **Recordable**: The seed is kept so a game can be replayed
//!
//! ## Usage
//!
//! ```
//! use set_engine::core::SetRng;
//!
//! let mut rng1 = SetRng::new(42);
//! let mut rng2 = SetRng::new(42);
//!
//! let mut a = vec![1, 2, 3, 4, 5, 6, 7, 8];
//! let mut b = a.clone();
//! rng1.shuffle(&mut a);
//! rng2.shuffle(&mut b);
//! assert_eq!(a, b);
//! ```

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded RNG backing every shuffle the engine performs.
///
/// Uses ChaCha8 for speed while keeping a high quality stream.
#[derive(Clone, Debug)]
pub struct SetRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl SetRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the thread-local entropy source.
    ///
    /// The chosen seed is still available through [`SetRng::seed`].
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle a slice in place (Fisher-Yates).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}

impl Default for SetRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RngCore for SetRng {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.inner.try_fill_bytes(dest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_determinism() {
        let mut rng1 = SetRng::new(42);
        let mut rng2 = SetRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_range(0..1000), rng2.gen_range(0..1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = SetRng::new(1);
        let mut rng2 = SetRng::new(2);

        let seq1: Vec<u32> = (0..10).map(|_| rng1.gen_range(0..1000)).collect();
        let seq2: Vec<u32> = (0..10).map(|_| rng2.gen_range(0..1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_shuffle_keeps_elements() {
        let mut rng = SetRng::new(42);
        let mut data: Vec<u32> = (1..=20).collect();
        let original = data.clone();

        rng.shuffle(&mut data);

        // Same elements, different order (overwhelmingly likely for 20 items)
        assert_ne!(data, original);
        data.sort_unstable();
        assert_eq!(data, original);
    }

    #[test]
    fn test_seed_is_recorded() {
        assert_eq!(SetRng::new(7).seed(), 7);

        let rng = SetRng::from_entropy();
        let mut replay = SetRng::new(rng.seed());
        let mut original = rng.clone();
        assert_eq!(original.next_u64(), replay.next_u64());
    }
}
