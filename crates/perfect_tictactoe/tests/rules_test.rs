//! Tests for the tic-tac-toe rules over every reachable board.

use std::collections::HashSet;

use perfect_tictactoe::{
    actions, player, result, status, terminal, utility, winner, Action, Board, GameStatus,
    MoveError, Player, Square,
};

/// Collects every board reachable from the empty board by legal play.
fn reachable_boards() -> Vec<Board> {
    let mut seen = HashSet::new();
    let mut stack = vec![Board::new()];
    while let Some(board) = stack.pop() {
        if !seen.insert(board) {
            continue;
        }
        if terminal(&board) {
            continue;
        }
        for action in actions(&board) {
            stack.push(result(&board, action).expect("legal action"));
        }
    }
    seen.into_iter().collect()
}

#[test]
fn test_reachable_board_count() {
    assert_eq!(reachable_boards().len(), 5478);
}

#[test]
fn test_mark_counts_stay_balanced() {
    for board in reachable_boards() {
        let diff = board.count(Player::X) as isize - board.count(Player::O) as isize;
        assert!(diff == 0 || diff == 1, "{board}");
    }
}

#[test]
fn test_player_alternates() {
    assert_eq!(player(&Board::new()), Player::X);
    for board in reachable_boards() {
        for action in actions(&board) {
            let next = result(&board, action).unwrap();
            assert_ne!(player(&board), player(&next));
        }
    }
}

#[test]
fn test_result_adds_exactly_one_mark() {
    for board in reachable_boards() {
        let before = board;
        let mover = player(&board);
        for action in actions(&board) {
            let next = result(&board, action).unwrap();
            assert_eq!(next.filled(), board.filled() + 1);
            assert_eq!(next.get(action), Some(Square::Occupied(mover)));
            for other in Action::ALL.iter().filter(|a| **a != action) {
                assert_eq!(next.get(*other), board.get(*other));
            }
        }
        assert_eq!(board, before);
    }
}

#[test]
fn test_illegal_actions_fail() {
    let off_board = [Action::new(3, 0), Action::new(0, 3), Action::new(9, 9)];
    for board in reachable_boards() {
        let legal = actions(&board);
        for action in Action::ALL.iter().chain(off_board.iter()) {
            if !legal.contains(action) {
                assert_eq!(result(&board, *action), Err(MoveError::InvalidMove(*action)));
            }
        }
    }
}

#[test]
fn test_terminal_iff_winner_or_full() {
    for board in reachable_boards() {
        let expected = winner(&board).is_some() || actions(&board).is_empty();
        assert_eq!(terminal(&board), expected, "{board}");
    }
}

#[test]
fn test_utility_matches_winner() {
    for board in reachable_boards().into_iter().filter(terminal) {
        let expected = match winner(&board) {
            Some(Player::X) => 1,
            Some(Player::O) => -1,
            None => 0,
        };
        assert_eq!(utility(&board), expected);
    }
}

#[test]
fn test_status_agrees_with_rules() {
    for board in reachable_boards() {
        match status(&board) {
            GameStatus::InProgress => assert!(!terminal(&board)),
            GameStatus::Won(player) => assert_eq!(winner(&board), Some(player)),
            GameStatus::Draw => {
                assert!(terminal(&board));
                assert_eq!(winner(&board), None);
            }
        }
    }
}

#[test]
fn test_full_board_without_line_is_draw() {
    let board: Board = "XOX/XOO/OXX".parse().unwrap();
    assert!(terminal(&board));
    assert_eq!(winner(&board), None);
    assert_eq!(utility(&board), 0);
}

#[test]
fn test_win_counts_by_player() {
    let boards = reachable_boards();
    let x_wins = boards.iter().filter(|b| winner(b) == Some(Player::X)).count();
    let o_wins = boards.iter().filter(|b| winner(b) == Some(Player::O)).count();
    let draws = boards.iter().filter(|b| status(b) == GameStatus::Draw).count();
    assert_eq!(x_wins, 626);
    assert_eq!(o_wins, 316);
    assert_eq!(draws, 16);
}
