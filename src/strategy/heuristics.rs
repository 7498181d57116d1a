//! Hand-tuned heuristic strategies.
//!
//! The margins, gap cutoffs, and per-branch roll counts here are tuned
//! design constants. They are the strategy; none of them is derived.

use crate::core::GOAL_SCORE;
use crate::rules::{free_bacon, is_prime};

use super::Strategy;

/// Free-bacon margin shared by the bacon and prime strategies.
const DEFAULT_MARGIN: u32 = 8;

/// Fallback roll count shared by the bacon and prime strategies.
const DEFAULT_NUM_ROLLS: u32 = 5;

/// Rolls zero dice whenever free bacon is worth at least the margin,
/// and a fixed count otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BaconStrategy {
    margin: u32,
    num_rolls: u32,
}

impl Default for BaconStrategy {
    fn default() -> Self {
        Self {
            margin: DEFAULT_MARGIN,
            num_rolls: DEFAULT_NUM_ROLLS,
        }
    }
}

impl BaconStrategy {
    /// Create the strategy with the standard margin (8) and fallback
    /// roll count (5).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum bonus worth taking.
    #[must_use]
    pub fn with_margin(mut self, margin: u32) -> Self {
        self.margin = margin;
        self
    }

    /// Set the fallback roll count.
    #[must_use]
    pub fn with_num_rolls(mut self, num_rolls: u32) -> Self {
        self.num_rolls = num_rolls;
        self
    }
}

impl Strategy for BaconStrategy {
    fn choose(&self, _score: u32, opponent_score: u32) -> u32 {
        if free_bacon(opponent_score) >= self.margin {
            0
        } else {
            self.num_rolls
        }
    }
}

/// Extends the bacon rule with prime awareness.
///
/// When the combined score is not yet prime, rolls zero dice only if the
/// bonus would make the combined score prime while leaving this player
/// strictly ahead. When the combined score is already prime, falls back
/// to the plain bacon margin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrimeStrategy {
    margin: u32,
    num_rolls: u32,
}

impl Default for PrimeStrategy {
    fn default() -> Self {
        Self {
            margin: DEFAULT_MARGIN,
            num_rolls: DEFAULT_NUM_ROLLS,
        }
    }
}

impl PrimeStrategy {
    /// Create the strategy with the standard margin (8) and fallback
    /// roll count (5).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum bonus worth taking.
    #[must_use]
    pub fn with_margin(mut self, margin: u32) -> Self {
        self.margin = margin;
        self
    }

    /// Set the fallback roll count.
    #[must_use]
    pub fn with_num_rolls(mut self, num_rolls: u32) -> Self {
        self.num_rolls = num_rolls;
        self
    }
}

impl Strategy for PrimeStrategy {
    fn choose(&self, score: u32, opponent_score: u32) -> u32 {
        let bacon = free_bacon(opponent_score);
        let test_score = score + opponent_score + bacon;

        if !is_prime(score + opponent_score) {
            if is_prime(test_score) && test_score - opponent_score > opponent_score {
                0
            } else {
                self.num_rolls
            }
        } else if bacon >= self.margin {
            0
        } else {
            self.num_rolls
        }
    }
}

// Tournament strategy constants. Distances are measured to the goal.
const FINAL_BACON_MARGIN: u32 = 10;
const CLOSE_OUT_DISTANCE: i64 = 15;
const CLOSE_OUT_ROLLS: u32 = 3;
const EARLY_LEAD_DISTANCE: i64 = 85;
const EARLY_LEAD_ROLLS: u32 = 3;
const OPENING_LEAD_DISTANCE: i64 = 90;
const OPENING_LEAD_ROLLS: u32 = 2;
const SPRINT_DISTANCE: i64 = 30;
const CATCH_UP_ROLLS: u32 = 7;
const CHASE_ROLLS: u32 = 6;
const PRIME_SETUP_ROLLS: u32 = 4;
const FALLBACK_ROLLS: u32 = 5;

/// The composite tournament strategy.
///
/// Blends a free-bacon margin, lead- and deficit-based roll counts, and
/// the prime-aware zero-roll play. Branches are ordered; the first match
/// wins.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FinalStrategy;

impl FinalStrategy {
    /// Create the tournament strategy.
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for FinalStrategy {
    fn choose(&self, score: u32, opponent_score: u32) -> u32 {
        let bacon = free_bacon(opponent_score);
        let test_score = score + opponent_score + bacon;
        let to_goal = i64::from(GOAL_SCORE) - i64::from(score);
        let opponent_to_goal = i64::from(GOAL_SCORE) - i64::from(opponent_score);

        // Deficit window the chase branch compares against; can go
        // negative for tiny opponent scores.
        let chase_window = if opponent_score < 10 {
            i64::from(opponent_score) - 1
        } else {
            (i64::from(opponent_score / 10) - i64::from(opponent_score % 10)).abs() - 1
        };

        if bacon >= FINAL_BACON_MARGIN {
            return 0;
        }

        if score > opponent_score && to_goal < CLOSE_OUT_DISTANCE {
            CLOSE_OUT_ROLLS
        } else if score > opponent_score && to_goal > EARLY_LEAD_DISTANCE {
            EARLY_LEAD_ROLLS
        } else if score > opponent_score && to_goal > OPENING_LEAD_DISTANCE {
            OPENING_LEAD_ROLLS
        } else if score < opponent_score && opponent_to_goal < SPRINT_DISTANCE {
            CATCH_UP_ROLLS
        } else if score < opponent_score && opponent_to_goal > chase_window {
            CHASE_ROLLS
        } else if !is_prime(score + opponent_score) {
            if is_prime(test_score) && test_score - opponent_score > opponent_score {
                0
            } else {
                PRIME_SETUP_ROLLS
            }
        } else if is_prime(score + opponent_score) {
            if bacon >= FINAL_BACON_MARGIN {
                0
            } else {
                PRIME_SETUP_ROLLS
            }
        } else {
            FALLBACK_ROLLS
        }
    }
}
