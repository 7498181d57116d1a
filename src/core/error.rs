//! Error types.
//!
//! Nearly every failure mode is a contract violation on function inputs,
//! reported at the call site. There is no recovery and no retry; a
//! violated precondition means the caller is wrong. The one runtime
//! fault is a strict fixed-outcome dice source running dry.

use thiserror::Error;

/// Errors produced by the simulator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HogError {
    /// The roll path requires at least one die.
    #[error("must roll at least one die")]
    ZeroRolls,

    /// A turn may roll at most [`MAX_ROLLS`](crate::rules::MAX_ROLLS) dice.
    #[error("cannot roll more than {max} dice (got {num_rolls})")]
    TooManyRolls { num_rolls: u32, max: u32 },

    /// A turn was taken although the opponent already reached the goal.
    #[error("game should be over: opponent score is {opponent_score}")]
    GameAlreadyOver { opponent_score: u32 },

    /// A strict fixed-outcome dice source ran out of outcomes.
    #[error("fixed dice exhausted after {len} outcomes")]
    DiceExhausted { len: usize },

    /// Fixed dice need at least one outcome.
    #[error("fixed dice require a non-empty outcome sequence")]
    EmptyOutcomes,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, HogError>;
