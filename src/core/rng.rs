//! Deterministic random number generation for deck shuffling.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical decks
//! - **Uniform shuffle**: Fisher–Yates, every permutation equally likely
//! - **Continuous stream**: Restarting a level draws fresh numbers, so the
//!   replacement deck is a new shuffle rather than a replay of the old one
//!
//! ## Usage
//!
//! ```
//! use memory_tiles::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut tiles = vec![0, 0, 1, 1, 2, 2];
//! rng.shuffle(&mut tiles);
//!
//! let mut again = GameRng::new(42);
//! let mut same = vec![0, 0, 1, 1, 2, 2];
//! again.shuffle(&mut same);
//!
//! assert_eq!(tiles, same);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded RNG backing every shuffle in a session.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
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

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform index in `0..=upper`.
    pub fn gen_index(&mut self, upper: usize) -> usize {
        self.inner.gen_range(0..=upper)
    }

    /// Shuffle a slice in place.
    ///
    /// Walks from the last index down to 1, swapping each element with one
    /// chosen uniformly from the indices at or below it.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.gen_index(i);
            slice.swap(i, j);
        }
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}
