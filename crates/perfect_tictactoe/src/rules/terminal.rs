//! Terminal detection and scoring.

use super::moves::actions;
use super::win::winner;
use crate::types::{Board, GameStatus, Player, Score};
use tracing::instrument;

/// Returns true if the game is over: someone has won or no move is left.
#[instrument(level = "trace", ret)]
pub fn terminal(board: &Board) -> bool {
    winner(board).is_some() || actions(board).is_empty()
}

/// Scores a board from X's point of view: `1` if X has won, `-1` if O has
/// won and `0` otherwise.
///
/// Only meaningful on terminal boards; an unfinished board scores `0`.
#[instrument(level = "trace", ret)]
pub fn utility(board: &Board) -> Score {
    match winner(board) {
        Some(Player::X) => 1,
        Some(Player::O) => -1,
        None => 0,
    }
}

/// Returns the outcome of the board: won, drawn or still in progress.
#[instrument(level = "trace", ret)]
pub fn status(board: &Board) -> GameStatus {
    match winner(board) {
        Some(player) => GameStatus::Won(player),
        None if board.is_full() => GameStatus::Draw,
        None => GameStatus::InProgress,
    }
}
