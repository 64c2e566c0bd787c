//! Table storage and replacement

use std::collections::HashMap;

use super::TTEntry;
use crate::types::{Bound, Pit, Value};

/// Fingerprint-keyed cache of search results.
///
/// Collisions between distinct boards are not detected; see
/// [`crate::zobrist`].
#[derive(Debug, Default, Clone)]
pub struct TranspositionTable {
    entries: HashMap<u64, TTEntry>,
}

impl TranspositionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table with room for `capacity` positions before reallocating
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn lookup(&self, key: u64) -> Option<&TTEntry> {
        self.entries.get(&key)
    }

    /// Inserts or replaces the entry for `key`.
    ///
    /// An existing entry is overwritten only by a result searched at least as
    /// deep. Returns whether the write happened.
    pub fn store(&mut self, key: u64, depth: i32, bound: Bound, score: Value, best_move: Pit) -> bool {
        let entry = TTEntry {
            depth,
            bound,
            score,
            best_move,
        };
        match self.entries.get_mut(&key) {
            Some(existing) if existing.depth > depth => false,
            Some(existing) => {
                *existing = entry;
                true
            }
            None => {
                self.entries.insert(key, entry);
                true
            }
        }
    }

    /// Drops every entry and keeps the allocation
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
