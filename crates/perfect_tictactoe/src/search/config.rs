//! Search configuration.

use serde::{Deserialize, Serialize};

/// Pruning strategy used below the root of the search.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Pruning {
    /// Each node carries only its parent's running best as a cutoff bound.
    #[default]
    SingleBound,
    /// Classical two-bound alpha-beta (fail-soft).
    AlphaBeta,
}

/// Configuration for a [`Searcher`](super::Searcher).
///
/// None of the options change the returned action or value; they only change
/// how much of the tree is visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Pruning strategy.
    pub pruning: Pruning,
    /// Memoize exact node values keyed by the board's symmetry class.
    pub transposition: bool,
    /// Answer the empty board with the fixed opening instead of searching.
    pub opening_book: bool,
}

impl SearchConfig {
    /// Single-bound pruning, no transposition table, opening book on.
    ///
    /// This is the configuration behind [`minimax`](super::minimax).
    pub fn plain() -> Self {
        Self {
            pruning: Pruning::SingleBound,
            transposition: false,
            opening_book: true,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            transposition: true,
            ..Self::plain()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pruning_names() {
        assert_eq!(Pruning::SingleBound.to_string(), "single-bound");
        assert_eq!("alpha-beta".parse::<Pruning>().unwrap(), Pruning::AlphaBeta);
        assert_eq!("Alpha-Beta".parse::<Pruning>().unwrap(), Pruning::AlphaBeta);
        assert!("beta".parse::<Pruning>().is_err());
    }

    #[test]
    fn test_default_enables_table() {
        let config = SearchConfig::default();
        assert!(config.transposition);
        assert!(config.opening_book);
        assert_eq!(config.pruning, Pruning::SingleBound);
        assert!(!SearchConfig::plain().transposition);
    }
}
