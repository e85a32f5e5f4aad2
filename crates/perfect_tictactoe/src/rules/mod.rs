//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board according to
//! tic-tac-toe rules. Every function takes a board snapshot and derives its
//! answer from the squares alone: whose turn it is, which moves are legal,
//! who has won and whether the game is over.
//!
//! The rules assume a board reachable by legal alternating play. Malformed
//! boards (for example three X marks and no O marks) are not rejected and
//! give best-effort answers.

pub mod moves;
pub mod terminal;
pub mod turn;
pub mod win;

pub use moves::{actions, result};
pub use terminal::{status, terminal, utility};
pub use turn::player;
pub use win::{winner, LINES};

pub(crate) use moves::successors;
