//! Stochastic dice backed by the deterministic RNG.

use crate::core::{DiceRng, Result};

use super::{DiceKind, DiceSource};

/// Uniform dice with outcomes in `[1, sides]`.
#[derive(Clone, Debug)]
pub struct RandomDice {
    sides: u32,
    rng: DiceRng,
}

impl RandomDice {
    /// Create dice of the given variant drawing from `rng`.
    #[must_use]
    pub fn new(kind: DiceKind, rng: DiceRng) -> Self {
        Self {
            sides: kind.sides(),
            rng,
        }
    }

    /// Standard four-sided dice.
    #[must_use]
    pub fn four_sided(rng: DiceRng) -> Self {
        Self::new(DiceKind::FourSided, rng)
    }

    /// Standard six-sided dice.
    #[must_use]
    pub fn six_sided(rng: DiceRng) -> Self {
        Self::new(DiceKind::SixSided, rng)
    }
}

impl DiceSource for RandomDice {
    fn roll(&mut self) -> Result<u32> {
        Ok(self.rng.gen_range(1..self.sides + 1))
    }
}
