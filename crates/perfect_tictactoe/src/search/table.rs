//! Transposition table keyed by board symmetry class.
//!
//! Different move orders reach the same board, and the eight rotations and
//! reflections of a board all have the same value. Each board is stored under
//! its canonical form: the smallest of its eight images.

use crate::types::{Board, Score, Square};
use std::collections::HashMap;
use tracing::instrument;

/// Index permutations for the eight symmetries of the grid.
///
/// Image square `i` takes its content from source square `SYMMETRIES[k][i]`.
const SYMMETRIES: [[usize; 9]; 8] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8], // identity
    [6, 3, 0, 7, 4, 1, 8, 5, 2], // rotate 90
    [8, 7, 6, 5, 4, 3, 2, 1, 0], // rotate 180
    [2, 5, 8, 1, 4, 7, 0, 3, 6], // rotate 270
    [2, 1, 0, 5, 4, 3, 8, 7, 6], // mirror columns
    [6, 7, 8, 3, 4, 5, 0, 1, 2], // mirror rows
    [0, 3, 6, 1, 4, 7, 2, 5, 8], // transpose
    [8, 5, 2, 7, 4, 1, 6, 3, 0], // anti-transpose
];

/// Returns the canonical representative of a board's symmetry class.
pub(crate) fn canonical(board: &Board) -> Board {
    let squares = board.squares();
    SYMMETRIES
        .iter()
        .map(|perm| Board::from_squares(perm.map(|i| squares[i])))
        .min()
        .unwrap_or(*board)
}

/// Cache of exact board values.
///
/// Only values that were fully searched (never cut off) are stored, so a hit
/// is always safe to return regardless of the caller's bounds.
#[derive(Debug, Clone, Default)]
pub struct TranspositionTable {
    entries: HashMap<Board, Score>,
}

impl TranspositionTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up the value of a board or any of its symmetric images.
    pub fn get(&self, board: &Board) -> Option<Score> {
        self.entries.get(&canonical(board)).copied()
    }

    /// Records the exact value of a board.
    pub fn insert(&mut self, board: &Board, value: Score) {
        self.entries.insert(canonical(board), value);
    }

    /// Number of symmetry classes stored.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes all entries.
    #[instrument(skip(self), fields(entries = self.entries.len()))]
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
