//! Deterministic fixed-sequence dice for tests.

use crate::core::{HogError, Result};

use super::DiceSource;

/// What happens once every configured outcome has been produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum OnExhausted {
    Cycle,
    Fail,
}

/// Dice that replay a fixed outcome sequence.
///
/// The cycling variant wraps around forever, which lets averaging tests
/// draw thousands of outcomes from a short sequence. The strict variant
/// errors once the sequence is spent, catching code that rolls more often
/// than intended.
#[derive(Clone, Debug)]
pub struct FixedDice {
    outcomes: Vec<u32>,
    cursor: usize,
    on_exhausted: OnExhausted,
}

impl FixedDice {
    /// Dice that cycle through `outcomes` forever.
    pub fn cycling(outcomes: Vec<u32>) -> Result<Self> {
        Self::with_mode(outcomes, OnExhausted::Cycle)
    }

    /// Dice that fail with [`HogError::DiceExhausted`] after one pass.
    pub fn strict(outcomes: Vec<u32>) -> Result<Self> {
        Self::with_mode(outcomes, OnExhausted::Fail)
    }

    fn with_mode(outcomes: Vec<u32>, on_exhausted: OnExhausted) -> Result<Self> {
        if outcomes.is_empty() {
            return Err(HogError::EmptyOutcomes);
        }
        Ok(Self {
            outcomes,
            cursor: 0,
            on_exhausted,
        })
    }

    /// How many outcomes have been produced so far.
    ///
    /// The turn engine promises to invoke its source an exact number of
    /// times; tests verify that promise through this counter.
    #[must_use]
    pub fn rolls_made(&self) -> usize {
        self.cursor
    }
}

impl DiceSource for FixedDice {
    fn roll(&mut self) -> Result<u32> {
        let len = self.outcomes.len();
        if self.cursor >= len && self.on_exhausted == OnExhausted::Fail {
            return Err(HogError::DiceExhausted { len });
        }
        let outcome = self.outcomes[self.cursor % len];
        self.cursor += 1;
        Ok(outcome)
    }
}
