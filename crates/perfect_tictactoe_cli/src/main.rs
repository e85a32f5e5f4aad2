//! Perfect Tic-Tac-Toe - Unified CLI
//!
//! Play against, watch, or query an exhaustive minimax player.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod analyze;
mod cli;
mod config;
mod players;
mod session;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use config::AppConfig;
use perfect_tictactoe::{Board, Mark, SearchConfig, Searcher};
use players::{ComputerPlayer, HumanPlayer, Player};
use session::GameSession;
use std::io;
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let mut config = AppConfig::load(cli.config.as_deref()).context("Failed to load config")?;
    apply_overrides(&cli, config.search_mut());
    debug!(?config, "Effective configuration");

    match cli.command {
        Command::Analyze { board } => run_analyze(board, *config.search()),
        Command::Play { human } => run_play(human.unwrap_or(*config.play().human()), *config.search()),
        Command::Selfplay { board } => run_selfplay(board.unwrap_or_default(), *config.search()),
    }
}

/// Applies command-line search flags on top of the file configuration
fn apply_overrides(cli: &Cli, search: &mut SearchConfig) {
    if let Some(pruning) = cli.pruning {
        search.pruning = pruning;
    }
    if cli.no_table {
        search.transposition = false;
    }
    if cli.no_opening_book {
        search.opening_book = false;
    }
}

/// Print an analysis of one board
#[instrument(skip(search))]
fn run_analyze(board: Board, search: SearchConfig) -> Result<()> {
    let mut searcher = Searcher::new(search);
    analyze::analyze(&board, &mut searcher, &mut io::stdout().lock())
}

/// Play a human on stdin against the computer
#[instrument(skip(search))]
fn run_play(human: Mark, search: SearchConfig) -> Result<()> {
    info!(%human, "Starting interactive game");
    println!("You play {}. Enter moves as row,col with rows and columns 0-2.\n", human);

    let mut person = HumanPlayer::new("You", io::stdin().lock(), io::stdout());
    let mut computer = ComputerPlayer::new("Computer", search);
    let (x, o): (&mut dyn Player, &mut dyn Player) = match human {
        Mark::X => (&mut person, &mut computer),
        Mark::O => (&mut computer, &mut person),
    };

    GameSession::new(Board::new(), x, o, io::stdout()).run()?;
    Ok(())
}

/// Let the computer play both sides
#[instrument(skip(search))]
fn run_selfplay(board: Board, search: SearchConfig) -> Result<()> {
    info!("Starting self-play");
    let mut x = ComputerPlayer::new("Computer X", search);
    let mut o = ComputerPlayer::new("Computer O", search);
    GameSession::new(board, &mut x, &mut o, io::stdout()).run()?;
    Ok(())
}
