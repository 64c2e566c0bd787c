//! Search statistics
//!
//! Counters for one `Searcher::search` call, covering every
//! iterative-deepening pass. Observability only; nothing in the search reads
//! them back.

use serde::{Deserialize, Serialize};

/// Search counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Negamax calls
    pub nodes: u64,
    /// Table lookups that found an entry
    pub tt_hits: u64,
    /// Nodes answered from the table without expanding children
    pub tt_cutoffs: u64,
    /// Sibling loops stopped by alpha >= beta
    pub beta_cutoffs: u64,
    /// Null-window probes that had to be searched again with the full window
    pub researches: u64,
    /// Children searched one ply shallower by LMR
    pub reductions: u64,
    /// Ply budget of the last completed pass
    pub depth: u32,
    /// Wall time for the whole call in milliseconds
    pub elapsed_ms: u64,
}

impl SearchStats {
    /// Share of nodes answered by the table, in percent
    pub fn tt_cutoff_rate(&self) -> f64 {
        if self.nodes == 0 {
            0.0
        } else {
            self.tt_cutoffs as f64 * 100.0 / self.nodes as f64
        }
    }
}

impl std::fmt::Display for SearchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "depth {} nodes {} tt_hits {} tt_cutoffs {} ({:.1}%) beta_cutoffs {} researches {} reductions {} time {}ms",
            self.depth,
            self.nodes,
            self.tt_hits,
            self.tt_cutoffs,
            self.tt_cutoff_rate(),
            self.beta_cutoffs,
            self.researches,
            self.reductions,
            self.elapsed_ms
        )
    }
}
