//! Turn engine: the score delta for a single turn.

use crate::core::{HogError, Result, GOAL_SCORE};
use crate::dice::DiceSource;

/// Most dice a player may roll in one turn.
pub const MAX_ROLLS: u32 = 10;

/// Score for a turn where any die showed a 1.
const PIG_OUT_SCORE: u32 = 1;

/// Roll `num_rolls` dice and sum the outcomes; if any single outcome is
/// a 1, the turn scores exactly 1 instead (pig out).
///
/// The source is invoked exactly `num_rolls` times, even after a 1 has
/// already appeared, so deterministic test dice observe the exact call
/// count.
pub fn roll_dice(num_rolls: u32, dice: &mut dyn DiceSource) -> Result<u32> {
    if num_rolls == 0 {
        return Err(HogError::ZeroRolls);
    }

    let mut sum = 0;
    let mut pig_out = false;
    for _ in 0..num_rolls {
        let outcome = dice.roll()?;
        sum += outcome;
        if outcome == 1 {
            pig_out = true;
        }
    }

    if pig_out {
        Ok(PIG_OUT_SCORE)
    } else {
        Ok(sum)
    }
}

/// Free-bacon bonus for rolling zero dice: one more than the larger
/// digit of the opponent's score.
#[must_use]
pub fn free_bacon(opponent_score: u32) -> u32 {
    1 + (opponent_score / 10).max(opponent_score % 10)
}

/// Simulate one turn: zero rolls takes the free-bacon bonus, otherwise
/// the dice are rolled.
///
/// At most [`MAX_ROLLS`] dice may be rolled, and the opponent must still
/// be below the goal; the game is assumed to be in progress.
pub fn take_turn(num_rolls: u32, opponent_score: u32, dice: &mut dyn DiceSource) -> Result<u32> {
    if num_rolls > MAX_ROLLS {
        return Err(HogError::TooManyRolls {
            num_rolls,
            max: MAX_ROLLS,
        });
    }
    if opponent_score >= GOAL_SCORE {
        return Err(HogError::GameAlreadyOver { opponent_score });
    }

    if num_rolls == 0 {
        Ok(free_bacon(opponent_score))
    } else {
        roll_dice(num_rolls, dice)
    }
}
