//! Search score (Value)
//!
//! Ordinary scores are store differentials and stay within ±48. `Value::WIN`
//! plays the role of +∞ for a decided game; `Value::INFINITE` only ever
//! appears as a window bound.

use serde::{Deserialize, Serialize};

/// Score from the side to move's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Value(i32);

impl Value {
    /// Zero
    pub const ZERO: Value = Value(0);
    /// Drawn game
    pub const DRAW: Value = Value(0);
    /// Won game (the side to move wins)
    pub const WIN: Value = Value(10_000);
    /// Lost game
    pub const LOSS: Value = Value(-10_000);
    /// Window bound strictly outside every reachable score
    pub const INFINITE: Value = Value(10_001);

    #[inline]
    pub const fn new(v: i32) -> Value {
        Value(v)
    }

    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// True for won or lost games
    #[inline]
    pub const fn is_decisive(self) -> bool {
        self.0 >= Self::WIN.0 || self.0 <= Self::LOSS.0
    }

    /// Encodes a score for the transposition table relative to the position's
    /// static evaluation. Decided-game scores do not depend on the store split
    /// and are kept as they are.
    #[inline]
    pub const fn to_tt(self, static_eval: Value) -> Value {
        if self.is_decisive() {
            self
        } else {
            Value(self.0 - static_eval.0)
        }
    }

    /// Inverse of [`Value::to_tt`] for the position being probed.
    #[inline]
    pub const fn from_tt(self, static_eval: Value) -> Value {
        if self.is_decisive() {
            self
        } else {
            Value(self.0 + static_eval.0)
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::ZERO
    }
}

impl std::ops::Neg for Value {
    type Output = Value;

    #[inline]
    fn neg(self) -> Value {
        Value(-self.0)
    }
}

impl std::ops::Add<i32> for Value {
    type Output = Value;

    #[inline]
    fn add(self, rhs: i32) -> Value {
        Value(self.0 + rhs)
    }
}

impl std::ops::Sub for Value {
    type Output = Value;

    #[inline]
    fn sub(self, rhs: Value) -> Value {
        Value(self.0 - rhs.0)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Value {
        Value(v)
    }
}

impl From<Value> for i32 {
    fn from(v: Value) -> i32 {
        v.0
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0 >= Self::WIN.0 {
            write!(f, "+inf")
        } else if self.0 <= Self::LOSS.0 {
            write!(f, "-inf")
        } else {
            write!(f, "{:+}", self.0)
        }
    }
}
