//! Game configuration.
//!
//! Every tunable the simulator exposes is an explicit field here or on
//! `ExperimentConfig` in the experiments module; there are no hidden
//! function defaults.

use serde::{Deserialize, Serialize};

/// Default goal: the game ends once either player reaches this score.
pub const GOAL_SCORE: u32 = 100;

/// Configuration for a single game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Score at which the game ends.
    pub goal: u32,

    /// Starting score for player 0.
    pub score0: u32,

    /// Starting score for player 1.
    pub score1: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            goal: GOAL_SCORE,
            score0: 0,
            score1: 0,
        }
    }
}

impl GameConfig {
    /// Create the default configuration: goal 100, scores starting at 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the goal score.
    #[must_use]
    pub fn with_goal(mut self, goal: u32) -> Self {
        self.goal = goal;
        self
    }

    /// Set the starting scores.
    #[must_use]
    pub fn with_starting_scores(mut self, score0: u32, score1: u32) -> Self {
        self.score0 = score0;
        self.score1 = score1;
        self
    }
}
