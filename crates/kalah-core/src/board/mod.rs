//! Board state and move rules
//!
//! - `Board`: 12 pits on one sowing cycle, two stores, the side to move
//! - `apply_move` / `undo_move`: sowing with extra turns and captures, exact reversal
//! - `game_state` / `final_outcome`: termination by empty side or store majority
//!
//! The board knows nothing about search; the search engine drives it through
//! `legal_moves`, `apply_move` (or the unchecked copy-and-sow path) and
//! `final_outcome`.

mod display;
mod moves;
mod notation;

pub use moves::LegalMoves;

use serde::{Deserialize, Serialize};

use crate::error::{IllegalMoveReason, KalahError, KalahResult};
use crate::types::{Pit, Player, STARTING_STONES, STONES_TO_WIN, TOTAL_STONES};

/// Why a game is (or is not) over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    InProgress,
    /// A store reached the majority threshold
    MajorityStones,
    /// The given player's six pits are all empty
    EmptySide(Player),
}

/// Result of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win(Player),
    Draw,
}

impl Outcome {
    #[inline]
    pub const fn winner(self) -> Option<Player> {
        match self {
            Outcome::Win(p) => Some(p),
            Outcome::Draw => None,
        }
    }

    fn from_totals(one: u32, two: u32) -> Outcome {
        match one.cmp(&two) {
            std::cmp::Ordering::Greater => Outcome::Win(Player::One),
            std::cmp::Ordering::Less => Outcome::Win(Player::Two),
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win(p) => write!(f, "{p} wins"),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

/// Where the last sown stone ended up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    /// Landed in the mover's store: the mover plays again
    ExtraTurn,
    /// Landed in an empty own pit facing stones; `captured` counts the
    /// opponent stones taken (the landing stone is not included)
    Capture { captured: u8 },
    /// Anything else
    Plain,
}

/// Everything needed to take a move back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Undo {
    pub pit: Pit,
    pub kind: MoveKind,
    prior: Board,
}

/// Game state: pit counts, stores, side to move.
///
/// The board is `Copy` (under 20 bytes); search code copies it per node
/// instead of sharing one mutable scratch board across recursion levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoard", into = "RawBoard")]
pub struct Board {
    pits: [u8; Pit::NUM],
    stores: [u8; Player::NUM],
    turn: Player,
    last_move: Option<Pit>,
}

/// Unchecked serialized form; validated through `Board::from_parts`
#[derive(Serialize, Deserialize)]
struct RawBoard {
    pits: [u8; Pit::NUM],
    stores: [u8; Player::NUM],
    turn: Player,
    last_move: Option<Pit>,
}

impl TryFrom<RawBoard> for Board {
    type Error = KalahError;

    fn try_from(raw: RawBoard) -> KalahResult<Board> {
        let mut board = Board::from_parts(raw.pits, raw.stores, raw.turn)?;
        board.last_move = raw.last_move;
        Ok(board)
    }
}

impl From<Board> for RawBoard {
    fn from(board: Board) -> RawBoard {
        RawBoard {
            pits: board.pits,
            stores: board.stores,
            turn: board.turn,
            last_move: board.last_move,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Starting position: four stones in every pit, player one to move
    pub const fn new() -> Board {
        Board {
            pits: [STARTING_STONES; Pit::NUM],
            stores: [0; Player::NUM],
            turn: Player::One,
            last_move: None,
        }
    }

    /// Builds an arbitrary position. Fails unless all 48 stones are present.
    pub fn from_parts(
        pits: [u8; Pit::NUM],
        stores: [u8; Player::NUM],
        turn: Player,
    ) -> KalahResult<Board> {
        let found: u32 = pits.iter().chain(stores.iter()).map(|&n| u32::from(n)).sum();
        if found != u32::from(TOTAL_STONES) {
            return Err(KalahError::StoneCount {
                found,
                expected: u32::from(TOTAL_STONES),
            });
        }
        Ok(Board {
            pits,
            stores,
            turn,
            last_move: None,
        })
    }

    #[inline]
    pub fn pits(&self) -> &[u8; Pit::NUM] {
        &self.pits
    }

    #[inline]
    pub fn pit(&self, pit: Pit) -> u8 {
        self.pits[pit.index()]
    }

    #[inline]
    pub fn store(&self, player: Player) -> u8 {
        self.stores[player.index()]
    }

    #[inline]
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Pit sown by the most recent `apply_move`, if any
    #[inline]
    pub fn last_move(&self) -> Option<Pit> {
        self.last_move
    }

    /// Stones left on `player`'s six pits
    pub fn side_stones(&self, player: Player) -> u32 {
        Pit::side(player).map(|p| u32::from(self.pit(p))).sum()
    }

    /// Pits plus stores; constant for the whole game
    pub fn total_stones(&self) -> u32 {
        self.pits.iter().chain(self.stores.iter()).map(|&n| u32::from(n)).sum()
    }

    /// True iff `pit` is on the side to move and holds stones
    #[inline]
    pub fn is_legal(&self, pit: Pit) -> bool {
        pit.owner() == self.turn && self.pit(pit) > 0
    }

    /// Legal pits for the side to move, ascending
    #[inline]
    pub fn legal_moves(&self) -> LegalMoves<'_> {
        LegalMoves::new(self)
    }

    fn check_legal(&self, pit: Pit) -> KalahResult<()> {
        if pit.owner() != self.turn {
            return Err(KalahError::IllegalMove {
                pit,
                reason: IllegalMoveReason::WrongSide { to_move: self.turn },
            });
        }
        if self.pit(pit) == 0 {
            return Err(KalahError::IllegalMove {
                pit,
                reason: IllegalMoveReason::EmptyPit,
            });
        }
        Ok(())
    }

    /// Plays `pit` for the side to move.
    ///
    /// Stones are sown one per slot in ascending index order; the mover's own
    /// store is an extra slot after their last pit, the opponent's store is
    /// skipped. Ending in the own store keeps the turn; ending in an empty own
    /// pit opposite a non-empty pit captures both into the mover's store.
    pub fn apply_move(&mut self, pit: Pit) -> KalahResult<Undo> {
        self.check_legal(pit)?;
        let prior = *self;
        let kind = self.sow(pit);
        Ok(Undo { pit, kind, prior })
    }

    /// Restores the position from before the move `undo` was returned for.
    #[inline]
    pub fn undo_move(&mut self, undo: Undo) {
        *self = undo.prior;
    }

    /// Copy of the board with a move already known to be legal played on it.
    #[inline]
    pub(crate) fn child(&self, pit: Pit) -> (Board, MoveKind) {
        let mut next = *self;
        let kind = next.sow(pit);
        (next, kind)
    }

    fn sow(&mut self, pit: Pit) -> MoveKind {
        debug_assert!(self.is_legal(pit), "sowing illegal pit {pit}");
        let mover = self.turn;
        let last_own = Pit::last(mover);

        let mut stones = std::mem::take(&mut self.pits[pit.index()]);
        let mut pos = pit.index();
        let mut in_store = false;
        while stones > 0 {
            if in_store {
                pos = (last_own + 1) % Pit::NUM;
                in_store = false;
                self.pits[pos] += 1;
            } else if pos == last_own {
                in_store = true;
                self.stores[mover.index()] += 1;
            } else {
                pos = (pos + 1) % Pit::NUM;
                self.pits[pos] += 1;
            }
            stones -= 1;
        }
        self.last_move = Some(pit);

        if in_store {
            debug_assert_eq!(self.total_stones(), u32::from(TOTAL_STONES));
            return MoveKind::ExtraTurn;
        }

        let mut kind = MoveKind::Plain;
        let landing = Pit::wrapping(pos);
        if landing.owner() == mover && self.pit(landing) == 1 {
            let opposite = landing.opposite();
            let captured = self.pit(opposite);
            if captured > 0 {
                self.stores[mover.index()] += captured + 1;
                self.pits[landing.index()] = 0;
                self.pits[opposite.index()] = 0;
                kind = MoveKind::Capture { captured };
            }
        }
        self.turn = mover.opponent();

        debug_assert_eq!(self.total_stones(), u32::from(TOTAL_STONES));
        kind
    }

    /// Termination status. The store threshold is checked before empty sides.
    pub fn game_state(&self) -> GameState {
        if self.stores.iter().any(|&s| s >= STONES_TO_WIN) {
            return GameState::MajorityStones;
        }
        for player in Player::ALL {
            if self.side_stones(player) == 0 {
                return GameState::EmptySide(player);
            }
        }
        GameState::InProgress
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.game_state() != GameState::InProgress
    }

    /// Result of a finished game, `None` while it is still in progress.
    ///
    /// When a side has run out of stones the other side's pits are counted
    /// towards their owner's store without touching the board.
    pub fn final_outcome(&self) -> Option<Outcome> {
        let one = u32::from(self.store(Player::One));
        let two = u32::from(self.store(Player::Two));
        match self.game_state() {
            GameState::InProgress => None,
            GameState::MajorityStones => Some(Outcome::from_totals(one, two)),
            GameState::EmptySide(Player::One) => {
                Some(Outcome::from_totals(one, two + self.side_stones(Player::Two)))
            }
            GameState::EmptySide(Player::Two) => {
                Some(Outcome::from_totals(one + self.side_stones(Player::One), two))
            }
        }
    }

    /// End-of-game cleanup: moves the stones left on the non-empty side into
    /// their owner's store, then reports the outcome. A no-op on a game decided
    /// by store majority.
    pub fn sweep_remaining(&mut self) -> Option<Outcome> {
        if let GameState::EmptySide(empty) = self.game_state() {
            let owner = empty.opponent();
            let swept = self.side_stones(owner);
            for pit in Pit::side(owner) {
                self.pits[pit.index()] = 0;
            }
            // at most 48
            self.stores[owner.index()] += swept as u8;
        }
        self.final_outcome()
    }
}

#[cfg(test)]
mod tests;
