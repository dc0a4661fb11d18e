//! Level Generator
//!
//! Draws the randomized level for a new node.
//!
//! ## Balancing Policy
//! Flip a fair coin; every success raises the level by one, and the draw
//! stops on the first failure or at `max_height`. This gives a geometric
//! distribution truncated at `max_height`: P(level >= k) ~ 2^-k, so level 0
//! holds every node and each level above thins out by half.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generates node levels in `[0, max_height]`
pub struct LevelGenerator {
    rng: StdRng,
    max_height: usize,
}

impl std::fmt::Debug for LevelGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LevelGenerator")
            .field("max_height", &self.max_height)
            .finish_non_exhaustive()
    }
}

impl LevelGenerator {
    /// Create a generator seeded from OS entropy
    pub fn new(max_height: usize) -> Self {
        Self {
            rng: StdRng::from_entropy(),
            max_height,
        }
    }

    /// Create a generator with a fixed seed
    ///
    /// The same seed reproduces the exact level sequence, which lets tests
    /// pin down the internal shape of a list.
    pub fn with_seed(max_height: usize, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            max_height,
        }
    }

    /// Draw a level for a new node
    pub fn generate(&mut self) -> usize {
        let mut level = 0;
        while level < self.max_height && self.rng.gen_bool(0.5) {
            level += 1;
        }
        level
    }

    /// The upper bound of generated levels
    pub fn max_height(&self) -> usize {
        self.max_height
    }
}
