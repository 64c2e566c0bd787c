//! Bound kind (Bound)

use super::Value;

/// Kind of score stored in the transposition table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Bound {
    /// Upper bound (fail-low: the true score is at most this)
    Upper = 1,
    /// Lower bound (fail-high: the true score is at least this)
    Lower = 2,
    /// Exact score
    Exact = 3,
}

impl Bound {
    /// Classifies a node's result against the window it was searched with.
    #[inline]
    pub fn from_window(score: Value, alpha: Value, beta: Value) -> Bound {
        if score <= alpha {
            Bound::Upper
        } else if score >= beta {
            Bound::Lower
        } else {
            Bound::Exact
        }
    }
}
