//! Turn derivation for tic-tac-toe.

use crate::types::{Board, Player};
use tracing::instrument;

/// Returns the player who has the next turn on a board.
///
/// X moves first, so O is to move exactly when X has one more mark than O.
/// Any other difference is treated as X to move.
#[instrument(level = "trace", ret)]
pub fn player(board: &Board) -> Player {
    let diff = board.count(Player::X) as isize - board.count(Player::O) as isize;
    if diff == 1 { Player::O } else { Player::X }
}
