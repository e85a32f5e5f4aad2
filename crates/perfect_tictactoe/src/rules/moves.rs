//! Legal-move enumeration and move application.

use super::turn::player;
use crate::action::{Action, MoveError};
use crate::types::{Board, Square};
use std::collections::BTreeSet;
use tracing::instrument;

/// Returns the set of all legal actions on the board.
///
/// Every empty square is a legal action; a full board yields an empty set.
/// The set iterates in row-major order.
#[instrument(level = "trace")]
pub fn actions(board: &Board) -> BTreeSet<Action> {
    Action::ALL
        .iter()
        .copied()
        .filter(|&action| board.get(action) == Some(Square::Empty))
        .collect()
}

/// Returns the board that results from the current player marking `action`.
///
/// The input board is left untouched. Fails with [`MoveError::InvalidMove`]
/// when the target square is occupied or off the board.
#[instrument(level = "trace")]
pub fn result(board: &Board, action: Action) -> Result<Board, MoveError> {
    match (action.index(), board.get(action)) {
        (Some(index), Some(Square::Empty)) => {
            Ok(board.with(index, Square::Occupied(player(board))))
        }
        _ => Err(MoveError::InvalidMove(action)),
    }
}

/// Iterates every legal action together with the board it produces, row-major.
pub(crate) fn successors(board: &Board) -> impl Iterator<Item = (Action, Board)> + '_ {
    let mark = Square::Occupied(player(board));
    board
        .squares()
        .iter()
        .enumerate()
        .filter(|(_, square)| **square == Square::Empty)
        .map(move |(index, _)| (Action::ALL[index], board.with(index, mark)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Player;

    #[test]
    fn test_all_squares_legal_on_empty_board() {
        let legal = actions(&Board::new());
        assert_eq!(legal.len(), 9);
        assert_eq!(legal.into_iter().collect::<Vec<_>>(), Action::ALL.to_vec());
    }

    #[test]
    fn test_actions_filters_occupied() {
        let board: Board = "X../.O./...".parse().unwrap();
        let legal = actions(&board);
        assert_eq!(legal.len(), 7);
        assert!(!legal.contains(&Action::new(0, 0)));
        assert!(!legal.contains(&Action::new(1, 1)));
        assert!(legal.contains(&Action::new(2, 2)));
    }

    #[test]
    fn test_full_board_has_no_actions() {
        let board: Board = "XOX/XOO/OXX".parse().unwrap();
        assert!(actions(&board).is_empty());
    }

    #[test]
    fn test_result_marks_current_player() {
        let board: Board = "X../.../...".parse().unwrap();
        let next = result(&board, Action::new(1, 1)).unwrap();
        assert_eq!(next.get(Action::new(1, 1)), Some(Square::Occupied(Player::O)));
        assert_eq!(board.get(Action::new(1, 1)), Some(Square::Empty));
    }

    #[test]
    fn test_result_rejects_occupied() {
        let board: Board = "X../.../...".parse().unwrap();
        assert_eq!(
            result(&board, Action::new(0, 0)),
            Err(MoveError::InvalidMove(Action::new(0, 0)))
        );
    }

    #[test]
    fn test_result_rejects_off_board() {
        let board = Board::new();
        assert_eq!(
            result(&board, Action::new(0, 3)),
            Err(MoveError::InvalidMove(Action::new(0, 3)))
        );
    }

    #[test]
    fn test_successors_match_result() {
        let board: Board = "XO./.X./...".parse().unwrap();
        let expected: Vec<_> = actions(&board)
            .into_iter()
            .map(|a| (a, result(&board, a).unwrap()))
            .collect();
        assert_eq!(successors(&board).collect::<Vec<_>>(), expected);
    }
}
