//! Randomness source for hand simulation.
//!
//! ## Key Features
//!
//! - **Unseeded by default**: `DrawRng::from_entropy` for live test hands
//! - **Seedable**: same seed produces identical shuffles, for tests and replays
//! - **Serializable**: O(1) state capture and restore
//!
//! ```
//! use deckdojo_engine::core::DrawRng;
//!
//! let mut a = DrawRng::seeded(42);
//! let mut b = DrawRng::seeded(42);
//! assert_eq!(a.index_inclusive(39), b.index_inclusive(39));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Uniform random source for shuffles.
///
/// Uses ChaCha8 for speed while keeping high quality randomness.
#[derive(Clone, Debug)]
pub struct DrawRng {
    inner: ChaCha8Rng,
    seed: Option<u64>,
}

impl DrawRng {
    /// Create an RNG with a fixed seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
            seed: None,
        }
    }

    /// The seed this RNG was created with, if any.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Uniform index in `[0, upper]`.
    pub fn index_inclusive(&mut self, upper: usize) -> usize {
        self.inner.gen_range(0..=upper)
    }

    /// Get the current state for replay. `None` for entropy-seeded RNGs.
    #[must_use]
    pub fn state(&self) -> Option<DrawRngState> {
        self.seed.map(|seed| DrawRngState {
            seed,
            word_pos: self.inner.get_word_pos(),
        })
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &DrawRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: Some(state.seed),
        }
    }
}

impl Default for DrawRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

/// Serializable RNG state.
///
/// Uses the ChaCha8 word position so capture is O(1) regardless of how
/// many shuffles have been run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawRngState {
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
