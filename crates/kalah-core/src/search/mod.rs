//! Search engine
//!
//! - `Searcher`: owns the position hasher, transposition table and counters
//! - `search`: iterative deepening over `alpha_beta::negamax`
//! - `select_move`: one-shot convenience wrapper
//!
//! Iterative deepening starts at 1 or 2 plies, matching the parity of the
//! target, and steps by 2. Every pass reuses the table filled by the shallower
//! ones for move ordering; only the deepest pass's result is returned. The
//! table is cleared at the start of each `search` call.

mod alpha_beta;
mod ordering;
mod stats;

pub use alpha_beta::{LMR_MIN_INDEX, LMR_MIN_REMAINING, LMR_REDUCTION, static_eval};
pub use ordering::{OrderedMove, OrderedMoves, order_moves, ordered_children};
pub use stats::SearchStats;

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::{KalahError, KalahResult};
use crate::tt::TranspositionTable;
use crate::types::{Pit, Value};
use crate::zobrist::PositionHasher;

use alpha_beta::{ABArgs, SearchContext, negamax};

/// Default ply budget
pub const DEFAULT_DEPTH: u32 = 10;

/// Outcome of one search call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub best_move: Pit,
    /// Score from the side to move's perspective
    pub score: Value,
    pub stats: SearchStats,
}

/// Ply budgets visited by iterative deepening for a target of `max_ply`
pub fn deepening_schedule(max_ply: u32) -> impl Iterator<Item = u32> {
    let start = if max_ply % 2 == 0 { 2 } else { 1 };
    (start..=max_ply).step_by(2)
}

/// Iterative-deepening searcher.
///
/// Reusable across calls; the table does not carry over between them.
#[derive(Debug, Default)]
pub struct Searcher {
    hasher: PositionHasher,
    tt: TranspositionTable,
    stats: SearchStats,
}

impl Searcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Searcher whose hash keys come from `seed`
    pub fn with_seed(seed: u64) -> Self {
        Self::with_hasher(PositionHasher::with_seed(seed))
    }

    pub fn with_hasher(hasher: PositionHasher) -> Self {
        Self {
            hasher,
            tt: TranspositionTable::new(),
            stats: SearchStats::default(),
        }
    }

    pub fn hasher(&self) -> &PositionHasher {
        &self.hasher
    }

    /// Counters of the most recent search
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Positions cached by the most recent search
    pub fn tt_len(&self) -> usize {
        self.tt.len()
    }

    /// Finds the best move for the side to move, looking `max_ply`
    /// turn-switching moves ahead. A `max_ply` of 0 is treated as 1.
    ///
    /// `board` is only read; the caller's position is never modified.
    pub fn search(&mut self, board: &Board, max_ply: u32) -> KalahResult<SearchResult> {
        if board.is_terminal() {
            return Err(KalahError::NoLegalMove);
        }
        let max_ply = max_ply.max(1);
        let start = Instant::now();
        self.tt.clear();
        self.stats = SearchStats::default();

        let mut result = None;
        for depth in deepening_schedule(max_ply) {
            let mut ctx = SearchContext {
                hasher: &self.hasher,
                tt: &mut self.tt,
                stats: &mut self.stats,
            };
            let (score, best_move) = negamax(&mut ctx, board, ABArgs::root(depth as i32));
            self.stats.depth = depth;
            log::debug!(
                "depth {depth}: best {} score {score} nodes {} tt {}",
                best_move.map_or_else(|| "-".to_string(), |p| p.to_string()),
                self.stats.nodes,
                self.tt.len()
            );
            result = best_move.map(|m| (m, score));
        }
        self.stats.elapsed_ms = start.elapsed().as_millis() as u64;

        // a non-terminal root always expands at least one child
        let (best_move, score) = result.ok_or(KalahError::NoLegalMove)?;
        log::debug!("search done: {}", self.stats);
        Ok(SearchResult {
            best_move,
            score,
            stats: self.stats,
        })
    }

    /// Expected line of play from `board`, read from the table left by the
    /// most recent search. Stops at a terminal position, a missing or
    /// illegal entry, or after `max_len` moves.
    pub fn principal_variation(&self, board: &Board, max_len: usize) -> Vec<Pit> {
        let mut line = Vec::with_capacity(max_len);
        let mut pos = *board;
        while line.len() < max_len && !pos.is_terminal() {
            let Some(entry) = self.tt.lookup(self.hasher.hash(&pos)) else {
                break;
            };
            if !pos.is_legal(entry.best_move) {
                break;
            }
            let (next, _) = pos.child(entry.best_move);
            line.push(entry.best_move);
            pos = next;
        }
        line
    }
}

/// One-shot search with a fresh searcher: best move and its score.
pub fn select_move(board: &Board, max_ply: u32) -> KalahResult<(Pit, Value)> {
    let result = Searcher::new().search(board, max_ply)?;
    Ok((result.best_move, result.score))
}
