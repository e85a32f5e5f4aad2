//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Player, Square};
use strum::IntoEnumIterator;
use tracing::instrument;

/// The eight winning lines as row-major square indices.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8], // Rows
    [0, 3, 6], [1, 4, 7], [2, 5, 8], // Columns
    [0, 4, 8], [2, 4, 6],            // Diagonals
];

/// Checks if there is a winner on the board.
///
/// All lines are scanned for X before any are scanned for O, so on a
/// malformed board where both players hold a line, X is reported.
#[instrument(level = "trace", ret)]
pub fn winner(board: &Board) -> Option<Player> {
    let squares = board.squares();
    Player::iter().find(|&player| {
        LINES
            .iter()
            .any(|line| line.iter().all(|&i| squares[i] == Square::Occupied(player)))
    })
}
