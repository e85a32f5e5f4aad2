//! Configurable minimax searcher.

use super::{prefer, worst_for, Pruning, SearchConfig, SearchStats, TranspositionTable};
use super::{INFINITY, OPENING};
use crate::action::Action;
use crate::rules::{player, successors, terminal, utility};
use crate::types::{Board, Player, Score};
use tracing::{debug, instrument, trace};

/// Minimax search with a reusable transposition table.
///
/// The table survives between calls, so a searcher driving a whole game gets
/// faster as the game goes on. Statistics are reset at the start of every
/// call and describe only the most recent search.
///
/// # Examples
///
/// ```
/// use perfect_tictactoe::{Action, Board, Pruning, SearchConfig, Searcher};
///
/// let mut searcher = Searcher::new(SearchConfig {
///     pruning: Pruning::AlphaBeta,
///     ..SearchConfig::default()
/// });
/// let board: Board = "XX./OO./...".parse().unwrap();
/// assert_eq!(searcher.best_action(&board), Some(Action::new(0, 2)));
/// assert_eq!(searcher.value(&board), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    config: SearchConfig,
    table: TranspositionTable,
    stats: SearchStats,
}

impl Searcher {
    /// Creates a searcher with an empty transposition table.
    #[instrument]
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            table: TranspositionTable::new(),
            stats: SearchStats::default(),
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Returns the statistics of the most recent search.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Returns the transposition table.
    pub fn table(&self) -> &TranspositionTable {
        &self.table
    }

    /// Forgets every memoized value.
    pub fn clear_table(&mut self) {
        self.table.clear();
    }

    /// Returns the optimal action for the player to move, or `None` if the
    /// game is over.
    ///
    /// Actions are tried row-major. An action replaces the current choice
    /// only when it strictly improves the mover's running best value.
    #[instrument(skip(self, board), fields(pruning = %self.config.pruning))]
    pub fn best_action(&mut self, board: &Board) -> Option<Action> {
        self.stats = SearchStats::default();

        if terminal(board) {
            debug!("Board is terminal, no action to choose");
            return None;
        }

        if self.config.opening_book && *board == Board::new() {
            debug!(action = %OPENING, "Playing book opening");
            return Some(OPENING);
        }

        let mover = player(board);
        let mut best_value = worst_for(mover);
        // Kept if no action ever improves on the initial bound.
        let mut best_action = OPENING;

        for (action, child) in successors(board) {
            let value = self.child_value(&child, mover, best_value);
            let updated = prefer(mover, best_value, value);
            if updated != best_value {
                trace!(%action, value, "New best action");
                best_value = updated;
                best_action = action;
            }
        }

        debug!(
            %best_action,
            best_value,
            nodes = self.stats.nodes,
            cutoffs = self.stats.cutoffs,
            table_hits = self.stats.table_hits,
            "Search complete"
        );
        Some(best_action)
    }

    /// Returns the exact game-theoretic value of a board under optimal play.
    #[instrument(skip(self, board), fields(pruning = %self.config.pruning))]
    pub fn value(&mut self, board: &Board) -> Score {
        self.stats = SearchStats::default();
        let value = match self.config.pruning {
            Pruning::SingleBound => self.single_bound(board, unbounded(player(board))),
            Pruning::AlphaBeta => self.alpha_beta(board, -INFINITY, INFINITY),
        };
        debug!(value, nodes = self.stats.nodes, "Evaluation complete");
        value
    }

    /// Searches a board with the single-bound rule against an inherited bound.
    ///
    /// `bound` is the running best of the parent node. The result is exact
    /// when it does not beat the bound in the mover's favor; otherwise it is
    /// only as good as the first reply found that beats it. This always uses
    /// single-bound pruning, whatever the configured strategy.
    pub fn bounded_value(&mut self, board: &Board, bound: Score) -> Score {
        self.stats = SearchStats::default();
        self.single_bound(board, bound)
    }

    // Value of a root child, searched with bounds derived from the root's running best.
    fn child_value(&mut self, child: &Board, mover: Player, best: Score) -> Score {
        match (self.config.pruning, mover) {
            (Pruning::SingleBound, _) => self.single_bound(child, best),
            (Pruning::AlphaBeta, Player::X) => self.alpha_beta(child, best, INFINITY),
            (Pruning::AlphaBeta, Player::O) => self.alpha_beta(child, -INFINITY, best),
        }
    }

    fn single_bound(&mut self, board: &Board, bound: Score) -> Score {
        self.stats.nodes += 1;
        if terminal(board) {
            return utility(board);
        }
        if let Some(value) = self.lookup(board) {
            return value;
        }

        let mover = player(board);
        let mut value = worst_for(mover);

        for (_, child) in successors(board) {
            let child_value = self.single_bound(&child, value);

            // The parent already has a reply at least as good for it as
            // `bound`. A reply here that beats the bound in the mover's favor
            // means the parent will never let the game reach this board.
            let beats_bound = match mover {
                Player::X => child_value > bound,
                Player::O => child_value < bound,
            };
            if beats_bound {
                self.stats.cutoffs += 1;
                return child_value;
            }
            value = prefer(mover, value, child_value);
        }

        self.store(board, value);
        value
    }

    fn alpha_beta(&mut self, board: &Board, mut alpha: Score, mut beta: Score) -> Score {
        self.stats.nodes += 1;
        if terminal(board) {
            return utility(board);
        }
        if let Some(value) = self.lookup(board) {
            return value;
        }

        let window = (alpha, beta);
        let mover = player(board);
        let mut value = worst_for(mover);

        for (_, child) in successors(board) {
            value = prefer(mover, value, self.alpha_beta(&child, alpha, beta));
            match mover {
                Player::X => alpha = alpha.max(value),
                Player::O => beta = beta.min(value),
            }
            if alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }

        // Outside the original window the value is only a bound.
        if window.0 < value && value < window.1 {
            self.store(board, value);
        }
        value
    }

    fn lookup(&mut self, board: &Board) -> Option<Score> {
        if !self.config.transposition {
            return None;
        }
        let hit = self.table.get(board);
        if hit.is_some() {
            self.stats.table_hits += 1;
        }
        hit
    }

    fn store(&mut self, board: &Board, value: Score) {
        if self.config.transposition {
            self.table.insert(board, value);
            self.stats.table_stores += 1;
        }
    }
}

// Bound that never triggers a cutoff for a node where `mover` is to act.
fn unbounded(mover: Player) -> Score {
    -worst_for(mover)
}
