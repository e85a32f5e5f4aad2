//! Command-line interface for perfect_tictactoe.

use clap::{Parser, Subcommand};
use perfect_tictactoe::{Board, Mark, Pruning};
use std::path::PathBuf;

/// Perfect Tic-Tac-Toe - exhaustive minimax player
#[derive(Parser, Debug)]
#[command(name = "perfect_tictactoe")]
#[command(about = "Play or analyze tic-tac-toe against a perfect opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to perfect_tictactoe.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Pruning strategy: single-bound or alpha-beta
    #[arg(long, global = true)]
    pub pruning: Option<Pruning>,

    /// Disable the transposition table
    #[arg(long, global = true)]
    pub no_table: bool,

    /// Search the empty board instead of playing the book opening
    #[arg(long, global = true)]
    pub no_opening_book: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show mover, legal moves, status, value and the best move for a board
    Analyze {
        /// Board as nine squares, row-major: X, O and . (e.g. "XX./OO./...")
        board: Board,
    },

    /// Play an interactive game against the computer
    Play {
        /// Mark the human plays (X moves first)
        #[arg(long)]
        human: Option<Mark>,
    },

    /// Let the computer play both sides
    Selfplay {
        /// Starting board (defaults to the empty board)
        #[arg(long)]
        board: Option<Board>,
    },
}
