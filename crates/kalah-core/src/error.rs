//! Error types for board and search operations
//!
//! Every variant is a caller error. Broken internal invariants are assertions,
//! not errors.

use crate::types::{Pit, Player};

/// Why a move was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMoveReason {
    /// The pit belongs to the player not on turn
    WrongSide { to_move: Player },
    /// The pit holds no stones
    EmptyPit,
}

impl std::fmt::Display for IllegalMoveReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMoveReason::WrongSide { to_move } => {
                write!(f, "pit is not on {to_move}'s side")
            }
            IllegalMoveReason::EmptyPit => write!(f, "pit is empty"),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum KalahError {
    /// Attempted move on an empty or out-of-turn pit
    #[error("illegal move at pit {pit}: {reason}")]
    IllegalMove { pit: Pit, reason: IllegalMoveReason },

    /// Search invoked on a finished game
    #[error("no legal move: the game is already over")]
    NoLegalMove,

    /// Pit index outside 0..12
    #[error("invalid pit index {0} (expected 0..=11)")]
    InvalidPit(usize),

    /// Malformed position text
    #[error("cannot parse position: {0}")]
    Parse(String),

    /// Position text whose stones do not add up to the full set
    #[error("position holds {found} stones, expected {expected}")]
    StoneCount { found: u32, expected: u32 },
}

/// Result type for kalah operations
pub type KalahResult<T> = Result<T, KalahError>;
