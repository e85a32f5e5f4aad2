//! Minimax game tree search.
//!
//! The search is exhaustive: tic-tac-toe is small enough that every line of
//! play can be followed to the end, so values are exact game-theoretic
//! scores rather than heuristic estimates.
//!
//! - [`minimax`], [`minimax_value`] and [`evaluate`] are one-shot functions.
//! - [`Searcher`] keeps a [`TranspositionTable`] between calls and can switch
//!   between single-bound and alpha-beta pruning via [`SearchConfig`].
//!
//! Legal actions are visited in row-major order. Among equally good actions
//! the first one that improves on the running best is returned, so results
//! are reproducible.

mod config;
mod engine;
mod oneshot;
mod stats;
mod table;

pub use config::{Pruning, SearchConfig};
pub use engine::Searcher;
pub use oneshot::{evaluate, minimax, minimax_value};
pub use stats::SearchStats;
pub use table::TranspositionTable;

use crate::action::Action;
use crate::types::{Player, Score};

/// A bound no terminal score can reach.
pub const INFINITY: Score = Score::MAX;

/// Action returned on the empty board without searching, and the placeholder
/// best action before any candidate improves on the running best.
pub const OPENING: Action = Action { row: 0, col: 1 };

/// The starting value for a player's running best: the worst possible score
/// from that player's point of view.
pub(crate) fn worst_for(player: Player) -> Score {
    match player {
        Player::X => -INFINITY,
        Player::O => INFINITY,
    }
}

/// Folds a new value into a player's running best.
pub(crate) fn prefer(player: Player, best: Score, value: Score) -> Score {
    match player {
        Player::X => best.max(value),
        Player::O => best.min(value),
    }
}
