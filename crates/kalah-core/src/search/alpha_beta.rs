//! Negamax with alpha-beta, transposition cutoffs, PVS and LMR
//!
//! Ply accounting: only turn-switching moves advance `ply`. A child reached
//! through an extra turn is searched at the same ply, from the same side's
//! perspective, with the same window.

use crate::board::{Board, Outcome};
use crate::tt::TranspositionTable;
use crate::types::{Bound, Pit, Value};
use crate::zobrist::PositionHasher;

use super::SearchStats;
use super::ordering::ordered_children;

/// Children ranked below this index are candidates for reduction
pub const LMR_MIN_INDEX: usize = 3;

/// Remaining depth required before reducing
pub const LMR_MIN_REMAINING: i32 = 6;

/// Plies taken off a reduced child's horizon
pub const LMR_REDUCTION: i32 = 1;

/// Shared state for one search call
pub(crate) struct SearchContext<'a> {
    pub(crate) hasher: &'a PositionHasher,
    pub(crate) tt: &'a mut TranspositionTable,
    pub(crate) stats: &'a mut SearchStats,
}

/// Per-node window and depth bookkeeping
#[derive(Debug, Clone, Copy)]
pub(crate) struct ABArgs {
    pub(crate) alpha: Value,
    pub(crate) beta: Value,
    /// Turn-switching moves made since the root
    pub(crate) ply: i32,
    /// Ply at which static evaluation takes over
    pub(crate) horizon: i32,
}

impl ABArgs {
    pub(crate) fn root(horizon: i32) -> Self {
        Self {
            alpha: -Value::INFINITE,
            beta: Value::INFINITE,
            ply: 0,
            horizon,
        }
    }

    /// Arguments for a child, flipped to the child's perspective unless the
    /// mover keeps the turn
    #[inline]
    fn child(&self, keeps_turn: bool, alpha: Value, beta: Value, horizon: i32) -> Self {
        if keeps_turn {
            Self {
                alpha,
                beta,
                ply: self.ply,
                horizon,
            }
        } else {
            Self {
                alpha: -beta,
                beta: -alpha,
                ply: self.ply + 1,
                horizon,
            }
        }
    }
}

/// Store differential from the side to move's point of view
#[inline]
pub fn static_eval(board: &Board) -> Value {
    let me = board.turn();
    Value::new(i32::from(board.store(me)) - i32::from(board.store(me.opponent())))
}

/// Score of a finished game for the side to move
#[inline]
fn terminal_score(board: &Board, outcome: Outcome) -> Value {
    match outcome.winner() {
        Some(p) if p == board.turn() => Value::WIN,
        Some(_) => Value::LOSS,
        None => Value::DRAW,
    }
}

/// Searches `board` and returns its score plus the best move found (`None`
/// at terminal and horizon nodes).
pub(crate) fn negamax(ctx: &mut SearchContext<'_>, board: &Board, args: ABArgs) -> (Value, Option<Pit>) {
    ctx.stats.nodes += 1;

    if let Some(outcome) = board.final_outcome() {
        return (terminal_score(board, outcome), None);
    }

    let eval = static_eval(board);
    let remaining = args.horizon - args.ply;
    let (orig_alpha, orig_beta) = (args.alpha, args.beta);
    let mut alpha = args.alpha;
    let mut beta = args.beta;

    let key = ctx.hasher.hash(board);
    let tt_entry = ctx.tt.lookup(key).copied();
    if let Some(entry) = tt_entry {
        ctx.stats.tt_hits += 1;
        if entry.covers(remaining) {
            let score = entry.value(eval);
            match entry.bound {
                Bound::Exact => {
                    ctx.stats.tt_cutoffs += 1;
                    return (score, Some(entry.best_move));
                }
                Bound::Lower => alpha = alpha.max(score),
                Bound::Upper => beta = beta.min(score),
            }
            if alpha >= beta {
                ctx.stats.tt_cutoffs += 1;
                return (score, Some(entry.best_move));
            }
        }
    }

    if args.ply >= args.horizon {
        return (eval, None);
    }

    let preferred = tt_entry.map(|e| e.best_move);
    let moves = ordered_children(board, preferred);
    debug_assert!(!moves.is_empty(), "non-terminal position without legal moves");

    let mut best: Option<(Value, Pit)> = None;
    for (i, mv) in moves.iter().enumerate() {
        let keeps_turn = mv.keeps_turn();
        let reduce = i >= LMR_MIN_INDEX && Some(mv.pit) != preferred && remaining >= LMR_MIN_REMAINING;
        let horizon = if reduce {
            ctx.stats.reductions += 1;
            args.horizon - LMR_REDUCTION
        } else {
            args.horizon
        };

        let search_child = |ctx: &mut SearchContext<'_>, lo: Value, hi: Value, horizon: i32| {
            let (score, _) = negamax(ctx, &mv.child, args.child(keeps_turn, lo, hi, horizon));
            if keeps_turn { score } else { -score }
        };

        let score = if i == 0 {
            search_child(ctx, alpha, beta, horizon)
        } else {
            let probe = search_child(ctx, alpha, alpha + 1, horizon);
            // a reduced child that beats alpha is verified at full depth too
            if (alpha < probe && probe < beta) || (reduce && probe > alpha) {
                ctx.stats.researches += 1;
                log::trace!(
                    "re-search pit {} at ply {}: probe {probe} in ({alpha}, {beta})",
                    mv.pit,
                    args.ply
                );
                search_child(ctx, alpha, beta, args.horizon)
            } else {
                probe
            }
        };

        if best.is_none_or(|(b, _)| score > b) {
            best = Some((score, mv.pit));
        }
        alpha = alpha.max(score);
        if alpha >= beta {
            ctx.stats.beta_cutoffs += 1;
            break;
        }
    }

    let Some((best_score, best_move)) = best else {
        return (eval, None);
    };

    if tt_entry.is_none_or(|e| remaining >= e.depth) {
        let bound = Bound::from_window(best_score, orig_alpha, orig_beta);
        ctx.tt.store(key, remaining, bound, best_score.to_tt(eval), best_move);
    }

    (best_score, Some(best_move))
}
