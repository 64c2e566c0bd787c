//! Legal move enumeration

use super::Board;
use crate::types::Pit;

/// Lazy iterator over the side to move's legal pits, ascending.
///
/// Each [`Board::legal_moves`] call starts a fresh ascending pass. A clone
/// resumes from wherever the original had got to.
#[derive(Debug, Clone)]
pub struct LegalMoves<'a> {
    board: &'a Board,
    next: usize,
    end: usize,
}

impl<'a> LegalMoves<'a> {
    pub(super) fn new(board: &'a Board) -> Self {
        let turn = board.turn();
        Self {
            board,
            next: Pit::first(turn),
            end: Pit::last(turn) + 1,
        }
    }
}

impl Iterator for LegalMoves<'_> {
    type Item = Pit;

    fn next(&mut self) -> Option<Pit> {
        while self.next < self.end {
            let pit = Pit::wrapping(self.next);
            self.next += 1;
            if self.board.pit(pit) > 0 {
                return Some(pit);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.end - self.next))
    }
}

impl std::iter::FusedIterator for LegalMoves<'_> {}
