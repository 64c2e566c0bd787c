//! Table entry

use crate::types::{Bound, Pit, Value};

/// One cached search result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TTEntry {
    /// Plies left to the horizon when the node was searched
    pub depth: i32,
    pub bound: Bound,
    /// Offset from the node's static evaluation (decided games stored as-is)
    pub score: Value,
    pub best_move: Pit,
}

impl TTEntry {
    /// Whether this entry was searched at least `depth` plies deep
    #[inline]
    pub fn covers(&self, depth: i32) -> bool {
        self.depth >= depth
    }

    /// Absolute score for a node whose static evaluation is `static_eval`
    #[inline]
    pub fn value(&self, static_eval: Value) -> Value {
        self.score.from_tt(static_eval)
    }
}
