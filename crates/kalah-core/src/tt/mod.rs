//! Transposition table
//!
//! Caches search results per position fingerprint.
//!
//! - `TTEntry`: remaining depth, bound kind, relative score, best move
//! - `TranspositionTable`: hash map from fingerprint to entry with
//!   depth-preferred replacement
//!
//! Scores are stored as offsets from the position's static evaluation
//! (`Value::to_tt` / `Value::from_tt`); callers convert on the way in and out.
//! The table lives for one top-level search and is cleared at its start.

mod entry;
mod table;

pub use entry::TTEntry;
pub use table::TranspositionTable;
