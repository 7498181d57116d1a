//! Dice sources: the only nondeterminism in a game.
//!
//! A dice source is a capability that produces the next outcome; callers
//! never see its internal state. Two standard stochastic variants exist
//! (outcomes in `[1, 4]` and `[1, 6]`), plus a deterministic
//! fixed-sequence variant for tests.

pub mod fixed;
pub mod random;

pub use fixed::FixedDice;
pub use random::RandomDice;

use serde::{Deserialize, Serialize};

use crate::core::{DiceRng, Result};

/// A source of dice outcomes.
///
/// Drawing an outcome advances the underlying stream (random state or a
/// fixed-sequence cursor), so the receiver is mutable. Sources are `Send`
/// so independent trials can move across worker threads.
pub trait DiceSource: Send {
    /// Produce the next outcome.
    fn roll(&mut self) -> Result<u32>;
}

/// Which standard dice variant a rule selected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiceKind {
    /// Four-sided dice, outcomes in `[1, 4]`.
    FourSided,
    /// Six-sided dice, outcomes in `[1, 6]`.
    SixSided,
}

impl DiceKind {
    /// Number of faces for this variant.
    #[must_use]
    pub const fn sides(self) -> u32 {
        match self {
            DiceKind::FourSided => 4,
            DiceKind::SixSided => 6,
        }
    }
}

impl std::fmt::Display for DiceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiceKind::FourSided => write!(f, "four-sided"),
            DiceKind::SixSided => write!(f, "six-sided"),
        }
    }
}

/// One dice source per standard variant.
///
/// The rule layer switches between the two variants round by round (hog
/// wild), so the game loop carries both; a single seed covers a whole
/// game.
pub struct DiceSet {
    four_sided: Box<dyn DiceSource>,
    six_sided: Box<dyn DiceSource>,
}

impl DiceSet {
    /// Build a set from explicit sources.
    pub fn new(four_sided: Box<dyn DiceSource>, six_sided: Box<dyn DiceSource>) -> Self {
        Self {
            four_sided,
            six_sided,
        }
    }

    /// Build both standard stochastic sources from forks of one seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        let mut rng = DiceRng::new(seed);
        Self {
            four_sided: Box::new(RandomDice::four_sided(rng.fork())),
            six_sided: Box::new(RandomDice::six_sided(rng.fork())),
        }
    }

    /// The source for the given variant.
    pub fn for_kind(&mut self, kind: DiceKind) -> &mut dyn DiceSource {
        match kind {
            DiceKind::FourSided => self.four_sided.as_mut(),
            DiceKind::SixSided => self.six_sided.as_mut(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dice_kind_sides() {
        assert_eq!(DiceKind::FourSided.sides(), 4);
        assert_eq!(DiceKind::SixSided.sides(), 6);
        assert_eq!(format!("{}", DiceKind::SixSided), "six-sided");
    }

    #[test]
    fn test_seeded_set_is_deterministic() {
        let mut set1 = DiceSet::seeded(42);
        let mut set2 = DiceSet::seeded(42);

        for _ in 0..50 {
            assert_eq!(
                set1.for_kind(DiceKind::SixSided).roll().unwrap(),
                set2.for_kind(DiceKind::SixSided).roll().unwrap()
            );
            assert_eq!(
                set1.for_kind(DiceKind::FourSided).roll().unwrap(),
                set2.for_kind(DiceKind::FourSided).roll().unwrap()
            );
        }
    }

    #[test]
    fn test_set_variants_are_independent() {
        // Drawing from one variant must not advance the other.
        let mut set1 = DiceSet::seeded(7);
        let mut set2 = DiceSet::seeded(7);

        for _ in 0..10 {
            set1.for_kind(DiceKind::FourSided).roll().unwrap();
        }

        assert_eq!(
            set1.for_kind(DiceKind::SixSided).roll().unwrap(),
            set2.for_kind(DiceKind::SixSided).roll().unwrap()
        );
    }

    #[test]
    fn test_set_from_fixed_sources() {
        let four = FixedDice::cycling(vec![2]).unwrap();
        let six = FixedDice::cycling(vec![5]).unwrap();
        let mut set = DiceSet::new(Box::new(four), Box::new(six));

        assert_eq!(set.for_kind(DiceKind::FourSided).roll().unwrap(), 2);
        assert_eq!(set.for_kind(DiceKind::SixSided).roll().unwrap(), 5);
    }
}
