//! Search statistics.

use serde::Serialize;

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Boards visited below the root, including terminal leaves.
    pub nodes: u64,
    /// Nodes whose remaining actions were skipped by pruning.
    pub cutoffs: u64,
    /// Nodes answered from the transposition table.
    pub table_hits: u64,
    /// Exact values written to the transposition table.
    pub table_stores: u64,
}
