//! Deterministic random number generation for scoring and drama.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Context streams**: Independent sequences for scoring vs drama
//! - **Capturable**: O(1) state capture and restore for replay
//!
//! ## Usage
//!
//! ```
//! use runway_sim::core::SeasonRng;
//!
//! let rng = SeasonRng::new(42);
//!
//! // Independent streams for different concerns
//! let mut scoring = rng.for_context("scoring");
//! let mut drama = rng.for_context("drama");
//!
//! // Same seed + same context = same sequence
//! let mut scoring2 = SeasonRng::new(42).for_context("scoring");
//! assert_eq!(scoring.gen_index(100), scoring2.gen_index(100));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Deterministic RNG for season simulation.
///
/// Uses ChaCha8 for speed while maintaining high-quality randomness.
/// Supports forking and context-based independent streams so scoring
/// draws never perturb drama draws and vice versa.
#[derive(Clone, Debug)]
pub struct SeasonRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl SeasonRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Create an independent stream for a specific context.
    ///
    /// Used to separate randomness domains (challenge scoring vs drama
    /// generation). The same context always produces the same stream
    /// from the same seed.
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
            fork_counter: 0,
        }
    }

    /// Generate a random index in `0..len`.
    ///
    /// Panics if `len` is zero.
    pub fn gen_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }

    /// Generate a uniform perturbation in `[-magnitude, magnitude)`.
    ///
    /// This is the performance-variance jitter added to challenge scores.
    pub fn gen_jitter(&mut self, magnitude: f64) -> f64 {
        self.inner.gen_range(-magnitude..magnitude)
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Get the current state for capture.
    #[must_use]
    pub fn state(&self) -> SeasonRngState {
        SeasonRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore from a captured state.
    #[must_use]
    pub fn from_state(state: &SeasonRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

/// Captured RNG state for replaying a draw.
///
/// Uses the ChaCha8 word position for O(1) capture regardless of how
/// many random numbers have been generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}
