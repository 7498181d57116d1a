//! Player identification for the two seats of a game.

use serde::{Deserialize, Serialize};

/// Player identifier for a two-player game.
///
/// Player 0 always moves first. The only way to obtain an id other than
/// the two constants is [`PlayerId::opponent`], so ids outside `{0, 1}`
/// cannot exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(u8);

impl PlayerId {
    /// The player who moves first.
    pub const ZERO: PlayerId = PlayerId(0);

    /// The player who moves second.
    pub const ONE: PlayerId = PlayerId(1);

    /// Get the raw player index (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> PlayerId {
        PlayerId(1 - self.0)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        assert_eq!(PlayerId::ZERO.index(), 0);
        assert_eq!(PlayerId::ONE.index(), 1);
        assert_eq!(format!("{}", PlayerId::ZERO), "Player 0");
    }

    #[test]
    fn test_opponent_flips() {
        assert_eq!(PlayerId::ZERO.opponent(), PlayerId::ONE);
        assert_eq!(PlayerId::ONE.opponent(), PlayerId::ZERO);
        assert_eq!(PlayerId::ZERO.opponent().opponent(), PlayerId::ZERO);
    }

    #[test]
    fn test_player_id_serde() {
        let json = serde_json::to_string(&PlayerId::ONE).unwrap();
        let back: PlayerId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, PlayerId::ONE);
    }
}
