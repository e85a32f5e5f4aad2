//! First-class action types for tic-tac-toe.
//!
//! An action names a target square by row and column. It is only meaningful
//! relative to a particular board: the same action can be legal on one board
//! and illegal on the next.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::instrument;

/// A move target: the `(row, col)` of the square to mark.
///
/// Actions order row-major, so sets of actions iterate from the top-left
/// square to the bottom-right one.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_new::new,
)]
pub struct Action {
    /// Row of the target square (0-2 on the board).
    pub row: usize,
    /// Column of the target square (0-2 on the board).
    pub col: usize,
}

impl Action {
    /// All nine on-board actions in row-major order.
    pub const ALL: [Action; 9] = [
        Action { row: 0, col: 0 },
        Action { row: 0, col: 1 },
        Action { row: 0, col: 2 },
        Action { row: 1, col: 0 },
        Action { row: 1, col: 1 },
        Action { row: 1, col: 2 },
        Action { row: 2, col: 0 },
        Action { row: 2, col: 1 },
        Action { row: 2, col: 2 },
    ];

    /// Converts the action to a row-major board index, if it is on the board.
    pub fn index(self) -> Option<usize> {
        (self.row < 3 && self.col < 3).then_some(self.row * 3 + self.col)
    }

    /// Creates the action for a row-major board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Error returned when an action cannot be parsed from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Expected \"row,col\" with two numbers, got {:?}", _0)]
pub struct ActionParseError(pub String);

impl std::error::Error for ActionParseError {}

impl FromStr for Action {
    type Err = ActionParseError;

    /// Parses `"row,col"`, `"row col"` or `"(row, col)"`.
    #[instrument(level = "trace")]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fail = || ActionParseError(s.to_string());
        let numbers = s
            .trim()
            .trim_start_matches('(')
            .trim_end_matches(')')
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .map(|part| part.parse::<usize>().map_err(|_| fail()))
            .collect::<Result<Vec<_>, _>>()?;

        match numbers.as_slice() {
            [row, col] => Ok(Action::new(*row, *col)),
            _ => Err(fail()),
        }
    }
}

/// Error that can occur when applying an action to a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The target square is occupied or off the board.
    #[display("Invalid move {}: square is occupied or off the board", _0)]
    InvalidMove(Action),
}

impl std::error::Error for MoveError {}
