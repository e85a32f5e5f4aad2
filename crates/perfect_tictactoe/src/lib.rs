//! Perfect-play tic-tac-toe.
//!
//! This library provides the rules of tic-tac-toe on a 3x3 board and an
//! exhaustive minimax search that finds the optimal move for whichever
//! player is to act.
//!
//! # Architecture
//!
//! - **Board model**: [`Board`], [`Square`], [`Player`] and [`Action`] are
//!   plain `Copy` values. Moves never mutate a board; they produce a new one.
//! - **Rules**: pure functions in [`rules`] derive the mover, the legal
//!   actions, the winner and the game status from a board snapshot.
//! - **Search**: [`minimax`] returns the optimal action; [`Searcher`] adds
//!   configurable pruning and a symmetry-aware transposition table.
//!
//! # Example
//!
//! ```
//! use perfect_tictactoe::{Action, Board, Player, minimax, rules};
//!
//! let board: Board = "XX./OO./...".parse().unwrap();
//! assert_eq!(rules::player(&board), Player::X);
//! assert_eq!(minimax(&board), Some(Action::new(0, 2)));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod rules;
pub mod search;
mod types;

pub use action::{Action, ActionParseError, MoveError};
pub use rules::{actions, player, result, status, terminal, utility, winner};
pub use search::{
    evaluate, minimax, minimax_value, Pruning, SearchConfig, SearchStats, Searcher,
    TranspositionTable,
};
pub use types::{Board, BoardParseError, GameStatus, Player, Score, Square};

/// Alias for clarity when a player is used as the symbol on a square.
pub type Mark = Player;
