//! Minimax Chess Engine
//!
//! Fixed-depth minimax with alpha-beta pruning over a material plus
//! piece-square evaluation. The search is generic over [`chess_core::Rules`],
//! so it runs on any rules implementation; [`MinimaxEngine`] wires it to
//! [`chess_core::Position`].

mod eval;
mod search;

use chess_core::{Engine, Position, SearchLimits, SearchResult};
use tracing::warn;

pub use eval::{evaluate, piece_square_value, piece_value, Score, PIECE_VALUES};
pub use search::{
    minimax_score, select_move, SearchContext, SearchError, SearchOptions, SearchOutcome,
    TerminalScoring, INFINITY, MATE_SCORE,
};

/// Chess engine running [`select_move`] on a private copy of the position.
///
/// The engine holds no search state between calls besides its settings and
/// the node count of the last search.
#[derive(Debug, Clone)]
pub struct MinimaxEngine {
    /// Node counter for statistics
    nodes: u64,
    terminal_scoring: TerminalScoring,
    /// Stop between root moves once the move time is used up
    honor_time_limit: bool,
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self {
            nodes: 0,
            terminal_scoring: TerminalScoring::Evaluate,
            honor_time_limit: true,
        }
    }

    pub fn with_terminal_scoring(mut self, terminal_scoring: TerminalScoring) -> Self {
        self.terminal_scoring = terminal_scoring;
        self
    }

    pub fn with_time_limit(mut self, honor: bool) -> Self {
        self.honor_time_limit = honor;
        self
    }

    pub fn terminal_scoring(&self) -> TerminalScoring {
        self.terminal_scoring
    }

    /// Nodes visited by the last search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for MinimaxEngine {
    fn search(&mut self, pos: &Position, limits: SearchLimits) -> SearchResult {
        self.nodes = 0;
        limits.start();

        let depth = if limits.depth == 0 {
            warn!("search requested at depth 0, using depth 1");
            1
        } else {
            limits.depth
        };

        let options = SearchOptions {
            terminal_scoring: self.terminal_scoring,
            time_control: self
                .honor_time_limit
                .then(|| limits.time_control.clone()),
        };

        let mut tmp = pos.clone();
        match select_move(&mut tmp, depth, &options) {
            Ok(outcome) => {
                self.nodes = outcome.nodes;
                SearchResult {
                    best_move: Some(outcome.best_move),
                    score: outcome.score,
                    depth,
                    nodes: outcome.nodes,
                    stopped: outcome.stopped,
                }
            }
            Err(_) => SearchResult::no_move(depth),
        }
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }

    fn set_option(&mut self, name: &str, value: &str) -> bool {
        match name.to_ascii_lowercase().as_str() {
            "terminalscoring" => match value.parse() {
                Ok(scoring) => self.terminal_scoring = scoring,
                Err(_) => return false,
            },
            "honortimelimit" => match value.parse::<bool>() {
                Ok(honor) => self.honor_time_limit = honor,
                Err(_) => return false,
            },
            _ => return false,
        }
        true
    }
}
