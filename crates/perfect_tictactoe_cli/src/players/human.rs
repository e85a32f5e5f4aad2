//! Human player reading moves from a text stream.

use super::Player;
use anyhow::{bail, Context, Result};
use perfect_tictactoe::{actions, player, Action, Board};
use std::io::{BufRead, Write};
use tracing::{debug, warn};

/// Human player typing `row,col` moves.
///
/// Illegal or unparsable input is reported and the prompt is repeated.
pub struct HumanPlayer<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn choose(&mut self, board: &Board) -> Result<Action> {
        let legal = actions(board);
        if legal.is_empty() {
            bail!("No moves available: the game is over");
        }

        loop {
            write!(
                self.output,
                "{} ({}) move as row,col: ",
                self.name,
                player(board)
            )?;
            self.output.flush()?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read move")?;
            if read == 0 {
                bail!("Input closed before {} moved", self.name);
            }

            match line.trim().parse::<Action>() {
                Ok(action) if legal.contains(&action) => {
                    debug!(player = %self.name, %action, "Human chose action");
                    return Ok(action);
                }
                Ok(action) => {
                    warn!(player = %self.name, %action, "Illegal move entered");
                    writeln!(self.output, "{} is not a free square.", action)?;
                }
                Err(e) => {
                    writeln!(self.output, "{}", e)?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
