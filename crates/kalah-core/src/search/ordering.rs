//! Move ordering
//!
//! Legal moves are ranked in stages, best first:
//!
//! 1. Preferred - the transposition table's best move
//! 2. Capture - ranked by captured stones, most first
//! 3. ExtraTurn - the last stone lands in the mover's store
//! 4. Quiet - everything else
//!
//! Ties inside a stage go to the higher pit index, i.e. the pit closer to the
//! mover's store. Ordering only affects how much gets pruned, never the score.

use smallvec::SmallVec;

use crate::board::{Board, MoveKind};
use crate::types::Pit;

/// A legal move with the position it leads to
#[derive(Debug, Clone, Copy)]
pub struct OrderedMove {
    pub pit: Pit,
    pub child: Board,
    pub kind: MoveKind,
}

impl OrderedMove {
    /// True when the mover plays again after this move
    #[inline]
    pub fn keeps_turn(&self) -> bool {
        self.kind == MoveKind::ExtraTurn
    }
}

/// Moves for one node; a side never has more than six
pub type OrderedMoves = SmallVec<[OrderedMove; Pit::PER_SIDE]>;

const STAGE_PREFERRED: i32 = 1_000_000;
const STAGE_CAPTURE: i32 = 200_000;
const STAGE_EXTRA_TURN: i32 = 100_000;

fn order_key(mv: &OrderedMove, preferred: Option<Pit>) -> i32 {
    let tiebreak = mv.pit.index() as i32;
    if preferred == Some(mv.pit) {
        return STAGE_PREFERRED;
    }
    match mv.kind {
        MoveKind::Capture { captured } => STAGE_CAPTURE + i32::from(captured) * 100 + tiebreak,
        MoveKind::ExtraTurn => STAGE_EXTRA_TURN + tiebreak,
        MoveKind::Plain => tiebreak,
    }
}

/// Plays every legal move on a copy of `board` and returns them best first.
///
/// A `preferred` move that is not legal here (possible after a hash collision)
/// is ignored.
pub fn ordered_children(board: &Board, preferred: Option<Pit>) -> OrderedMoves {
    let mut scored: SmallVec<[(OrderedMove, i32); Pit::PER_SIDE]> = board
        .legal_moves()
        .map(|pit| {
            let (child, kind) = board.child(pit);
            let mv = OrderedMove { pit, child, kind };
            (mv, order_key(&mv, preferred))
        })
        .collect();
    scored.sort_unstable_by(|a, b| b.1.cmp(&a.1));
    scored.into_iter().map(|(mv, _)| mv).collect()
}

/// Legal pits of the side to move, best first
pub fn order_moves(board: &Board, preferred: Option<Pit>) -> SmallVec<[Pit; Pit::PER_SIDE]> {
    ordered_children(board, preferred).iter().map(|mv| mv.pit).collect()
}
