//! Pit index on the flattened sowing cycle

use super::Player;
use serde::{Deserialize, Serialize};

/// A pit on the 12-slot sowing cycle.
///
/// Indices 0..=5 belong to player one, 6..=11 to player two. Sowing walks
/// indices upward and wraps; each player's store sits right after that
/// player's last pit and is not part of the index space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(transparent)]
pub struct Pit(u8);

impl Pit {
    /// Total pits on the board
    pub const NUM: usize = 12;
    /// Pits per side
    pub const PER_SIDE: usize = 6;

    /// Creates a pit from a global index, `None` when out of range
    #[inline]
    pub const fn new(index: usize) -> Option<Pit> {
        if index < Self::NUM {
            Some(Pit(index as u8))
        } else {
            None
        }
    }

    /// Pit at `index` taken modulo 12
    #[inline]
    pub(crate) const fn wrapping(index: usize) -> Pit {
        Pit((index % Self::NUM) as u8)
    }

    /// Pit `offset` (0..=5) counted from the start of `player`'s side
    #[inline]
    pub const fn of(player: Player, offset: usize) -> Pit {
        debug_assert!(offset < Self::PER_SIDE);
        Pit((Self::first(player) + offset) as u8)
    }

    /// First global index on `player`'s side
    #[inline]
    pub const fn first(player: Player) -> usize {
        match player {
            Player::One => 0,
            Player::Two => Self::PER_SIDE,
        }
    }

    /// Last global index on `player`'s side; that player's store follows it
    #[inline]
    pub const fn last(player: Player) -> usize {
        Self::first(player) + Self::PER_SIDE - 1
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Offset within the owner's side (0..=5)
    #[inline]
    pub const fn offset(self) -> usize {
        self.0 as usize % Self::PER_SIDE
    }

    /// Player that may sow from this pit
    #[inline]
    pub const fn owner(self) -> Player {
        if (self.0 as usize) < Self::PER_SIDE {
            Player::One
        } else {
            Player::Two
        }
    }

    /// Capture partner: (i + 6) mod 12
    #[inline]
    pub const fn opposite(self) -> Pit {
        Pit(((self.0 as usize + Self::PER_SIDE) % Self::NUM) as u8)
    }

    /// All pits in ascending index order
    pub fn all() -> impl Iterator<Item = Pit> {
        (0..Self::NUM as u8).map(Pit)
    }

    /// Pits on `player`'s side in ascending index order
    pub fn side(player: Player) -> impl DoubleEndedIterator<Item = Pit> + ExactSizeIterator {
        let first = Self::first(player) as u8;
        (first..first + Self::PER_SIDE as u8).map(Pit)
    }
}

impl TryFrom<u8> for Pit {
    type Error = String;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        Pit::new(v as usize).ok_or_else(|| format!("pit index {v} out of range"))
    }
}

impl From<Pit> for u8 {
    fn from(p: Pit) -> u8 {
        p.0
    }
}

impl std::fmt::Display for Pit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
