//! Cell tags.
//!
//! A tag is the small integer stored in a board cell:
//! - `0`: empty
//! - `1`: owned by player 0
//! - `2`: owned by player 1
//!
//! Tags are one higher than the owning player's index. Every conversion
//! between the two goes through this module.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Cell marker. `Tag::EMPTY` for a free cell, otherwise a player's mark.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag(pub u8);

impl Tag {
    /// A free cell.
    pub const EMPTY: Tag = Tag(0);

    /// Both player tags, in player order.
    pub const PLAYERS: [Tag; 2] = [Tag(1), Tag(2)];

    /// The mark placed by `player`.
    #[must_use]
    pub const fn for_player(player: PlayerId) -> Self {
        Self(player.0 + 1)
    }

    /// The player owning this mark, `None` for an empty cell.
    #[must_use]
    pub const fn owner(self) -> Option<PlayerId> {
        match self.0 {
            0 => None,
            t => Some(PlayerId::new(t - 1)),
        }
    }

    /// The other player's mark. Empty stays empty.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self.0 {
            1 => Tag(2),
            2 => Tag(1),
            _ => Tag::EMPTY,
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// State-string digit for this tag.
    #[must_use]
    pub const fn to_digit(self) -> char {
        (b'0' + self.0) as char
    }

    /// Parse a state-string digit. Only `'0'`, `'1'` and `'2'` are tags.
    #[must_use]
    pub const fn from_digit(digit: char) -> Option<Self> {
        match digit {
            '0' => Some(Tag::EMPTY),
            '1' => Some(Tag(1)),
            '2' => Some(Tag(2)),
            _ => None,
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tag({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_mapping_is_offset_by_one() {
        assert_eq!(Tag::for_player(PlayerId::new(0)), Tag(1));
        assert_eq!(Tag::for_player(PlayerId::new(1)), Tag(2));
        assert_eq!(Tag(1).owner(), Some(PlayerId::new(0)));
        assert_eq!(Tag(2).owner(), Some(PlayerId::new(1)));
        assert_eq!(Tag::EMPTY.owner(), None);
    }

    #[test]
    fn test_mapping_round_trips_for_every_seat() {
        for player in PlayerId::all(2) {
            assert_eq!(Tag::for_player(player).owner(), Some(player));
        }
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Tag(1).opponent(), Tag(2));
        assert_eq!(Tag(2).opponent(), Tag(1));
        assert_eq!(Tag::EMPTY.opponent(), Tag::EMPTY);
    }

    #[test]
    fn test_digits() {
        for tag in [Tag::EMPTY, Tag(1), Tag(2)] {
            assert_eq!(Tag::from_digit(tag.to_digit()), Some(tag));
        }
        assert_eq!(Tag::from_digit('3'), None);
        assert_eq!(Tag::from_digit('a'), None);
    }
}
