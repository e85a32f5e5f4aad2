//! Board analysis report.

use anyhow::Result;
use perfect_tictactoe::{actions, player, status, Board, Searcher};
use std::io::Write;
use tracing::instrument;

/// Writes mover, legal moves, status, value and best move for a board.
#[instrument(skip(searcher, output))]
pub fn analyze(board: &Board, searcher: &mut Searcher, output: &mut impl Write) -> Result<()> {
    writeln!(output, "{}\n", board)?;

    let current = status(board);
    writeln!(output, "Status: {}", current)?;
    if current.is_over() {
        writeln!(output, "Best move: none (game over)")?;
        return Ok(());
    }

    let legal: Vec<String> = actions(board).iter().map(|a| a.to_string()).collect();
    writeln!(output, "To move: {}", player(board))?;
    writeln!(output, "Legal moves: {}", legal.join(" "))?;
    writeln!(output, "Value: {}", searcher.value(board))?;

    match searcher.best_action(board) {
        Some(action) => writeln!(output, "Best move: {}", action)?,
        None => writeln!(output, "Best move: none")?,
    }
    let stats = searcher.stats();
    writeln!(
        output,
        "Searched {} nodes ({} cutoffs, {} table hits)",
        stats.nodes, stats.cutoffs, stats.table_hits
    )?;
    Ok(())
}
