//! Game loop driving two players to the end of a game.

use crate::players::Player;
use anyhow::{Context, Result};
use perfect_tictactoe::{player, result, status, Board, GameStatus, Mark};
use std::io::Write;
use tracing::{info, instrument};

/// A game between two players, printing the board after every move.
pub struct GameSession<'a, W> {
    board: Board,
    x: &'a mut dyn Player,
    o: &'a mut dyn Player,
    output: W,
}

impl<'a, W: Write> GameSession<'a, W> {
    /// Creates a session starting from `board`.
    pub fn new(board: Board, x: &'a mut dyn Player, o: &'a mut dyn Player, output: W) -> Self {
        Self { board, x, o, output }
    }

    /// Plays until the game is over and returns the final status.
    #[instrument(skip(self), fields(x = %self.x.name(), o = %self.o.name()))]
    pub fn run(mut self) -> Result<GameStatus> {
        writeln!(self.output, "{}\n", self.board)?;

        loop {
            let current = status(&self.board);
            if current.is_over() {
                info!(status = %current, "Game over");
                self.announce(current)?;
                return Ok(current);
            }

            let mover = player(&self.board);
            let contestant = match mover {
                Mark::X => &mut *self.x,
                Mark::O => &mut *self.o,
            };
            let action = contestant.choose(&self.board)?;
            let name = contestant.name().to_string();

            self.board = result(&self.board, action)
                .with_context(|| format!("{} chose an illegal move", name))?;
            info!(player = %name, %action, "Move played");
            writeln!(self.output, "{} ({}) plays {}\n{}\n", name, mover, action, self.board)?;
        }
    }

    fn announce(&mut self, outcome: GameStatus) -> Result<()> {
        match outcome {
            GameStatus::Won(mark) => {
                let name = match mark {
                    Mark::X => self.x.name(),
                    Mark::O => self.o.name(),
                };
                writeln!(self.output, "{} ({}) wins!", name, mark)?;
            }
            GameStatus::Draw => writeln!(self.output, "It's a draw.")?,
            GameStatus::InProgress => {}
        }
        Ok(())
    }
}
