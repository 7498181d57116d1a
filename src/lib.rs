//! # rust-hog
//!
//! A simulator for the two-player dice game Hog: a fixed game loop, a
//! small set of rule-based scoring modifiers, and hand-tuned heuristic
//! strategies compared via Monte Carlo win-rate estimation.
//!
//! ## Rules
//!
//! - **Pig out**: if any single die shows a 1, the turn scores exactly 1.
//! - **Free bacon**: rolling zero dice scores one more than the larger
//!   digit of the opponent's score.
//! - **Hog wild**: four-sided dice are used whenever the combined score
//!   is a multiple of 7.
//! - **Prime bonus**: when the combined score after a turn is prime, the
//!   trailing player gains the turn's score a second time.
//!
//! ## Design Principles
//!
//! 1. **Explicit randomness**: every stochastic dice source is built from
//!    an explicit seed. There is no ambient global RNG, so games and
//!    experiments replay exactly.
//!
//! 2. **Capabilities at the seams**: dice sources and strategies are
//!    traits. Tests swap in deterministic fixed-sequence dice; experiments
//!    swap strategies freely.
//!
//! 3. **Configuration over defaults**: goal scores, margins, and sample
//!    counts are config fields or named constants, never buried defaults.
//!
//! ## Modules
//!
//! - `core`: player identity, deterministic RNG, configuration, errors
//! - `dice`: the dice source capability and its implementations
//! - `rules`: turn engine and rule layer (pure scoring logic)
//! - `game`: the alternating-turn game loop
//! - `strategy`: heuristic strategies from constant to tournament-grade
//! - `experiments`: Monte Carlo estimators and the experiment report

pub mod core;
pub mod dice;
pub mod experiments;
pub mod game;
pub mod rules;
pub mod strategy;

// Re-export commonly used types
pub use crate::core::{DiceRng, GameConfig, HogError, PlayerId, Result, GOAL_SCORE};

pub use crate::dice::{DiceKind, DiceSet, DiceSource, FixedDice, RandomDice};

pub use crate::rules::{
    free_bacon, is_prime, prime_bonus, roll_dice, select_dice, take_turn, MAX_ROLLS,
};

pub use crate::game::{play, GameOutcome};

pub use crate::strategy::{AlwaysRoll, BaconStrategy, FinalStrategy, PrimeStrategy, Strategy};

pub use crate::experiments::{
    average_win_rate, make_averaged, max_scoring_num_rolls, run_experiments, winner,
    ExperimentConfig, ExperimentReport, DEFAULT_NUM_SAMPLES,
};
