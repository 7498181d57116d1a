//! Game loop: strict turn alternation until a player reaches the goal.

use serde::{Deserialize, Serialize};

use crate::core::{GameConfig, PlayerId, Result};
use crate::dice::DiceSet;
use crate::rules::{prime_bonus, select_dice, take_turn};
use crate::strategy::Strategy;

/// Final scores of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    score0: u32,
    score1: u32,
}

impl GameOutcome {
    /// Build an outcome from final scores.
    #[must_use]
    pub const fn new(score0: u32, score1: u32) -> Self {
        Self { score0, score1 }
    }

    /// Final score for the given player.
    #[must_use]
    pub const fn score(&self, player: PlayerId) -> u32 {
        match player.index() {
            0 => self.score0,
            _ => self.score1,
        }
    }

    /// Final scores as a `(player 0, player 1)` pair.
    #[must_use]
    pub const fn scores(&self) -> (u32, u32) {
        (self.score0, self.score1)
    }

    /// The winning player.
    ///
    /// Player 0 wins only on a strictly higher score; ties go to
    /// player 1.
    #[must_use]
    pub const fn winner(&self) -> PlayerId {
        if self.score0 > self.score1 {
            PlayerId::ZERO
        } else {
            PlayerId::ONE
        }
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.score0, self.score1)
    }
}

/// Simulate a game and return the final scores of both players.
///
/// Each round: the active player's strategy picks a dice count from the
/// two scores, the rule layer selects the dice variant from the same
/// pair, the turn is resolved and added to the active score, the turn
/// passes, and the prime bonus is applied to the new combined score
/// using this turn's delta.
///
/// The goal is checked only between rounds, so a prime bonus can carry a
/// score past the goal before the loop notices.
pub fn play(
    strategy0: &dyn Strategy,
    strategy1: &dyn Strategy,
    dice: &mut DiceSet,
    config: &GameConfig,
) -> Result<GameOutcome> {
    let mut score0 = config.score0;
    let mut score1 = config.score1;
    let mut who = PlayerId::ZERO;

    while score0 < config.goal && score1 < config.goal {
        let delta = if who == PlayerId::ZERO {
            let num_rolls = strategy0.choose(score0, score1);
            let kind = select_dice(score0, score1);
            let delta = take_turn(num_rolls, score1, dice.for_kind(kind))?;
            score0 += delta;
            delta
        } else {
            let num_rolls = strategy1.choose(score1, score0);
            let kind = select_dice(score1, score0);
            let delta = take_turn(num_rolls, score0, dice.for_kind(kind))?;
            score1 += delta;
            delta
        };

        who = who.opponent();
        (score0, score1) = prime_bonus(score0, score1, delta);
    }

    Ok(GameOutcome::new(score0, score1))
}
