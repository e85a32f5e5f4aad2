//! Tests for minimax search optimality and configuration equivalence.

use std::collections::HashSet;

use perfect_tictactoe::{
    actions, evaluate, minimax, player, result, terminal, utility, Action, Board, Player,
    Pruning, SearchConfig, Searcher,
};

fn reachable_boards() -> Vec<Board> {
    let mut seen = HashSet::new();
    let mut stack = vec![Board::new()];
    while let Some(board) = stack.pop() {
        if seen.insert(board) && !terminal(&board) {
            stack.extend(actions(&board).into_iter().map(|a| result(&board, a).unwrap()));
        }
    }
    let mut boards: Vec<Board> = seen.into_iter().collect();
    boards.sort();
    boards
}

/// Plays both sides with the given searcher until the game ends.
fn play_out(mut board: Board, searcher: &mut Searcher) -> Board {
    while let Some(action) = searcher.best_action(&board) {
        board = result(&board, action).expect("searcher chose an illegal action");
    }
    board
}

#[test]
fn test_opening_move() {
    assert_eq!(minimax(&Board::new()), Some(Action::new(0, 1)));
}

#[test]
fn test_immediate_win_scenario() {
    let board: Board = "XX./OO./...".parse().unwrap();
    assert_eq!(player(&board), Player::X);
    assert_eq!(minimax(&board), Some(Action::new(0, 2)));
}

#[test]
fn test_none_iff_terminal() {
    let mut searcher = Searcher::default();
    for board in reachable_boards() {
        assert_eq!(searcher.best_action(&board).is_none(), terminal(&board), "{board}");
    }
}

#[test]
fn test_recommended_action_preserves_value() {
    let mut oracle = Searcher::default();
    let mut searcher = Searcher::default();
    for board in reachable_boards().into_iter().filter(|b| !terminal(b)) {
        let action = searcher.best_action(&board).unwrap();
        let next = result(&board, action).unwrap();
        assert_eq!(oracle.value(&next), oracle.value(&board), "{board}\nplayed {action}");
    }
}

#[test]
fn test_perfect_play_ends_at_board_value() {
    let mut searcher = Searcher::default();
    for board in reachable_boards().into_iter().filter(|b| b.filled() >= 4) {
        let expected = evaluate(&board);
        let end = play_out(board, &mut searcher);
        assert!(terminal(&end));
        assert_eq!(utility(&end), expected, "{board}");
    }
}

#[test]
fn test_self_play_from_start_is_draw() {
    for pruning in [Pruning::SingleBound, Pruning::AlphaBeta] {
        let mut searcher = Searcher::new(SearchConfig {
            pruning,
            ..SearchConfig::default()
        });
        let end = play_out(Board::new(), &mut searcher);
        assert!(end.is_full(), "{pruning}: {end}");
        assert_eq!(utility(&end), 0);
    }
}

#[test]
fn test_configurations_choose_same_action() {
    let mut reference = Searcher::new(SearchConfig::plain());
    let mut variants: Vec<Searcher> = [
        (Pruning::SingleBound, true),
        (Pruning::AlphaBeta, false),
        (Pruning::AlphaBeta, true),
    ]
    .into_iter()
    .map(|(pruning, transposition)| {
        Searcher::new(SearchConfig {
            pruning,
            transposition,
            opening_book: true,
        })
    })
    .collect();

    // Boards with few marks take the unmemoized reference a while; start at two.
    for board in reachable_boards().into_iter().filter(|b| b.filled() >= 2) {
        let expected = reference.best_action(&board);
        for searcher in &mut variants {
            assert_eq!(searcher.best_action(&board), expected, "{:?}\n{board}", searcher.config());
        }
    }
}

#[test]
fn test_must_block_column() {
    // X threatens the left column; O must answer at (2, 0).
    let board: Board = "X../X.O/...".parse().unwrap();
    assert_eq!(player(&board), Player::O);
    assert_eq!(minimax(&board), Some(Action::new(2, 0)));
}

#[test]
fn test_prefers_win_over_block() {
    let board: Board = "XX./.O./..O".parse().unwrap();
    assert_eq!(minimax(&board), Some(Action::new(0, 2)));
}
