//! One-shot minimax entry points.

use super::{SearchConfig, Searcher};
use crate::action::Action;
use crate::types::{Board, Score};
use tracing::instrument;

/// Returns the optimal action for the current player on the board.
///
/// Returns `None` exactly when the board is terminal. The empty board is
/// answered with `(0, 1)` without searching. Otherwise every legal action is
/// searched with single-bound pruning and no memoization.
#[instrument(level = "debug")]
pub fn minimax(board: &Board) -> Option<Action> {
    Searcher::new(SearchConfig::plain()).best_action(board)
}

/// Searches a board with single-bound pruning against the parent's running
/// best value `bound`.
///
/// X nodes stop at the first reply scoring above `bound`, O nodes at the
/// first reply scoring below it, and return that reply's value. Terminal
/// boards return their utility.
#[instrument(level = "debug")]
pub fn minimax_value(board: &Board, bound: Score) -> Score {
    Searcher::new(SearchConfig::plain()).bounded_value(board, bound)
}

/// Returns the exact value of a board under optimal play by both sides.
#[instrument(level = "debug")]
pub fn evaluate(board: &Board) -> Score {
    Searcher::default().value(board)
}
