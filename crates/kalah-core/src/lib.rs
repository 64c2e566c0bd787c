//! # kalah-core
//!
//! Kalah (6 pits per side, 4 stones) rules and search engine.
//!
//! ## Modules
//!
//! - `types`: basic types (Player, Pit, Value, Bound)
//! - `board`: board state, sowing, captures, termination
//! - `zobrist`: position hashing
//! - `tt`: transposition table
//! - `search`: iterative deepening negamax with PVS and LMR, move ordering
//! - `error`: error types
//!
//! ```
//! use kalah_core::{Board, select_move};
//!
//! let board = Board::new();
//! let (pit, score) = select_move(&board, 4).unwrap();
//! assert_eq!(pit.index(), 2);
//! assert_eq!(score.raw(), 1);
//! ```

// Basic types
pub mod types;

pub mod error;

// Board representation
pub mod board;

// Hashing and transposition table
pub mod tt;
pub mod zobrist;

// Search
pub mod search;

pub use board::{Board, GameState, MoveKind, Outcome, Undo};
pub use error::{IllegalMoveReason, KalahError, KalahResult};
pub use search::{SearchResult, SearchStats, Searcher, select_move};
pub use types::{Bound, Pit, Player, Value};
pub use zobrist::PositionHasher;
