//! Scoring rules: the turn engine and the rule layer.
//!
//! Everything here is a pure function of scores and dice outcomes. The
//! game loop owns all mutable state; these functions only compute.

pub mod modifiers;
pub mod turn;

pub use modifiers::{is_prime, prime_bonus, select_dice};
pub use turn::{free_bacon, roll_dice, take_turn, MAX_ROLLS};
