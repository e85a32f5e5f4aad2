//! Core domain types for tic-tac-toe.

use crate::action::Action;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::instrument;

/// Game-theoretic score of a board from X's point of view.
///
/// Terminal boards score `+1` (X won), `0` (draw) or `-1` (O won).
pub type Score = i32;

/// Player in the game.
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
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X (goes first, maximizes the score).
    X,
    /// Player O (goes second, minimizes the score).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the character used for this player's mark.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Character used for this square in the text format.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(player) => player.symbol(),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// A board is an immutable snapshot. The only way to derive a new board from
/// an existing one is [`crate::rules::result`], which leaves its input intact.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Creates a board from squares in row-major order.
    ///
    /// No consistency check is performed; boards that cannot arise from
    /// legal play produce best-effort results from the rules.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square targeted by an action, or `None` when it is off the board.
    pub fn get(&self, action: Action) -> Option<Square> {
        action.index().map(|index| self.squares[index])
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Counts the squares holding the player's mark.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|&&square| square == Square::Occupied(player))
            .count()
    }

    /// Counts the non-empty squares.
    pub fn filled(&self) -> usize {
        self.squares.iter().filter(|&&s| s != Square::Empty).count()
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        self.filled() == 9
    }

    /// Returns a copy of this board with one square replaced.
    pub(crate) fn with(mut self, index: usize, square: Square) -> Self {
        self.squares[index] = square;
        self
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.squares.chunks(3).enumerate() {
            if row > 0 {
                f.write_str("\n-+-+-\n")?;
            }
            let line: Vec<String> = cells.iter().map(|s| s.symbol().to_string()).collect();
            f.write_str(&line.join("|"))?;
        }
        Ok(())
    }
}

/// Error returned when a board cannot be parsed from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// The text did not describe exactly nine squares.
    #[display("Expected 9 squares, found {}", _0)]
    WrongLength(usize),

    /// The text contained a character that is not a square.
    #[display("Unknown square symbol {:?}", _0)]
    UnknownSymbol(char),
}

impl std::error::Error for BoardParseError {}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine squares in row-major order.
    ///
    /// `X` and `O` (either case) are marks; `.`, `_` and `-` are empty
    /// squares. Whitespace, `/` and `|` are ignored, so `"XX./OO./..."` and
    /// `"X X . | O O . | . . ."` describe the same board.
    #[instrument(level = "trace")]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let squares = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/' && *c != '|')
            .map(|c| match c {
                'X' | 'x' => Ok(Square::Occupied(Player::X)),
                'O' | 'o' => Ok(Square::Occupied(Player::O)),
                '.' | '_' | '-' => Ok(Square::Empty),
                other => Err(BoardParseError::UnknownSymbol(other)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let len = squares.len();
        let squares: [Square; 9] = squares
            .try_into()
            .map_err(|_| BoardParseError::WrongLength(len))?;
        Ok(Self { squares })
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(*player),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }

    /// Returns true once the game can accept no more moves.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(player) => write!(f, "Player {} wins", player),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}
