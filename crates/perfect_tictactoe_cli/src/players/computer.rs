//! Computer player backed by minimax search.

use super::Player;
use anyhow::{anyhow, Result};
use perfect_tictactoe::{Action, Board, SearchConfig, Searcher};
use tracing::debug;

/// Computer player that always plays an optimal move.
pub struct ComputerPlayer {
    name: String,
    searcher: Searcher,
}

impl ComputerPlayer {
    /// Creates a new computer player.
    pub fn new(name: impl Into<String>, config: SearchConfig) -> Self {
        Self {
            name: name.into(),
            searcher: Searcher::new(config),
        }
    }
}

impl Player for ComputerPlayer {
    fn choose(&mut self, board: &Board) -> Result<Action> {
        debug!(player = %self.name, "Computer searching");
        let action = self
            .searcher
            .best_action(board)
            .ok_or_else(|| anyhow!("No moves available: the game is over"))?;
        let stats = self.searcher.stats();
        debug!(
            player = %self.name,
            %action,
            nodes = stats.nodes,
            table_hits = stats.table_hits,
            "Computer chose action"
        );
        Ok(action)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_computer_takes_win() {
        let mut computer = ComputerPlayer::new("CPU", SearchConfig::default());
        let board: Board = "XX./OO./...".parse().unwrap();
        assert_eq!(computer.choose(&board).unwrap(), Action::new(0, 2));
        assert_eq!(computer.name(), "CPU");
    }

    #[test]
    fn test_computer_errors_on_finished_game() {
        let mut computer = ComputerPlayer::new("CPU", SearchConfig::default());
        let board: Board = "XXX/OO./...".parse().unwrap();
        assert!(computer.choose(&board).is_err());
    }
}
