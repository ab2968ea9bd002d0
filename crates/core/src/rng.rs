//! RNG module - the single random source for a game
//!
//! Dice, weapon placement, free-square selection, the murder envelope and the
//! deal all draw from one [`GameRng`] that callers pass in explicitly. Seeding
//! it makes a whole game reproducible, which the tests rely on.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::types::DIE_FACES;

/// Seedable random source threaded through every component that needs chance.
#[derive(Debug, Clone)]
pub struct GameRng {
    inner: StdRng,
    seed: u64,
}

impl GameRng {
    /// Create a deterministic RNG from `seed`
    pub fn new(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG with a fresh seed from the OS.
    ///
    /// The chosen seed is still available through [`GameRng::seed`] so the
    /// game can be replayed.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Roll one six-sided die (1..=6)
    pub fn roll_die(&mut self) -> u8 {
        self.inner.gen_range(1..=DIE_FACES)
    }

    /// Roll the two movement dice
    pub fn roll_dice(&mut self) -> (u8, u8) {
        (self.roll_die(), self.roll_die())
    }

    /// Uniform index in `[0, len)`, or `None` when `len` is zero
    pub fn next_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.inner.gen_range(0..len))
    }

    /// Uniformly pick one element
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.inner)
    }

    /// Shuffle in place (Fisher-Yates)
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.inner);
    }
}
