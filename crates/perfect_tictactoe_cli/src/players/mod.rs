//! Player trait and implementations.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::HumanPlayer;

use anyhow::Result;
use perfect_tictactoe::{Action, Board};

/// Trait for players that can make moves.
pub trait Player {
    /// Chooses the next action on a board where it is this player's turn.
    fn choose(&mut self, board: &Board) -> Result<Action>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
