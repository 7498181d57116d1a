//! Core types: player identity, deterministic RNG, configuration, errors.
//!
//! Everything here is game-rule-agnostic. The rule modules build on these
//! without adding any state of their own.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{GameConfig, GOAL_SCORE};
pub use error::{HogError, Result};
pub use player::PlayerId;
pub use rng::DiceRng;
