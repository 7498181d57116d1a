//! Rule layer: dice selection (hog wild) and the prime bonus.

use crate::dice::DiceKind;

/// Combined scores divisible by this switch the game to four-sided dice.
const HOG_WILD_MODULUS: u32 = 7;

/// Select the dice variant for a turn: four-sided when the combined
/// score is a multiple of 7 (hog wild), six-sided otherwise.
#[must_use]
pub fn select_dice(score: u32, opponent_score: u32) -> DiceKind {
    if (score + opponent_score) % HOG_WILD_MODULUS == 0 {
        DiceKind::FourSided
    } else {
        DiceKind::SixSided
    }
}

/// Whether a non-negative integer is prime. 0 and 1 are not prime.
///
/// Plain trial division over every candidate divisor. The inputs are
/// combined game scores, never large enough for asymptotics to matter.
#[must_use]
pub fn is_prime(n: u32) -> bool {
    if n < 2 {
        return false;
    }
    for k in 2..n {
        if n % k == 0 {
            return false;
        }
    }
    true
}

/// Apply the post-turn prime bonus.
///
/// When the combined score is prime, the player with the strictly lower
/// score gains this turn's delta a second time. A tie awards nothing.
#[must_use]
pub fn prime_bonus(score0: u32, score1: u32, turn_delta: u32) -> (u32, u32) {
    if !is_prime(score0 + score1) {
        return (score0, score1);
    }

    if score0 < score1 {
        (score0 + turn_delta, score1)
    } else if score1 < score0 {
        (score0, score1 + turn_delta)
    } else {
        (score0, score1)
    }
}
