//! Chess Simulator
//!
//! The move-selection boundary: a FEN string goes in, a UCI move comes out.
//! Colors covered by [`SearchSide`] are searched with the minimax engine;
//! the other color plays a uniformly random legal move.
//!
//! ```no_run
//! let mv = chess_simulator::choose_move(
//!     "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
//!     10_000,
//! )?;
//! println!("{}", mv.unwrap_or_default());
//! # Ok::<(), chess_simulator::SimulatorError>(())
//! ```

mod config;
mod session;

use std::time::Duration;

use chess_core::{move_to_uci, Engine, FenError, Position, SearchLimits, SearchResult};
use minimax_engine::{MinimaxEngine, TerminalScoring};
use random_engine::RandomEngine;
use thiserror::Error;
use tracing::debug;

pub use config::{ConfigError, SearchSide, SimulatorConfig, DEFAULT_DEPTH, DEFAULT_TIME_LIMIT_MS};
pub use session::UciSession;

#[derive(Debug, Error)]
pub enum SimulatorError {
    #[error("invalid position: {0}")]
    InvalidPosition(#[from] FenError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Picks moves according to a [`SimulatorConfig`].
///
/// Nothing carries over between calls except the random generator.
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SimulatorConfig,
    random: RandomEngine,
}

impl Simulator {
    pub fn new(config: SimulatorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            random: RandomEngine::new(),
        })
    }

    /// Makes the random side reproducible.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random = RandomEngine::seeded(seed);
        self
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    pub fn set_depth(&mut self, depth: u8) -> Result<(), ConfigError> {
        if depth == 0 {
            return Err(ConfigError::InvalidDepth(depth));
        }
        self.config.depth = depth;
        Ok(())
    }

    pub fn set_search_side(&mut self, side: SearchSide) {
        self.config.search_side = side;
    }

    pub fn set_terminal_scoring(&mut self, scoring: TerminalScoring) {
        self.config.terminal_scoring = scoring;
    }

    /// Limits for one move at the configured depth. `None` falls back to the
    /// configured time budget.
    pub fn limits(&self, time_limit_ms: Option<u64>) -> SearchLimits {
        let ms = time_limit_ms.unwrap_or(self.config.time_limit_ms);
        SearchLimits::depth_and_time(self.config.depth, Duration::from_millis(ms))
    }

    /// Chooses a move for the side to move in `fen`.
    ///
    /// Returns `Ok(None)` when that side has no legal moves.
    pub fn choose_move(
        &mut self,
        fen: &str,
        time_limit_ms: Option<u64>,
    ) -> Result<Option<String>, SimulatorError> {
        let pos = Position::from_fen(fen)?;
        let result = self.search(&pos, self.limits(time_limit_ms));
        Ok(result.best_move.map(move_to_uci))
    }

    fn minimax(&self) -> MinimaxEngine {
        MinimaxEngine::new()
            .with_terminal_scoring(self.config.terminal_scoring)
            .with_time_limit(self.config.honor_time_limit)
    }
}

impl Engine for Simulator {
    fn search(&mut self, pos: &Position, limits: SearchLimits) -> SearchResult {
        let side = pos.side_to_move;
        if self.config.search_side.searches(side) {
            debug!(?side, depth = limits.depth, "searching");
            self.minimax().search(pos, limits)
        } else {
            debug!(?side, "playing a random move");
            self.random.search(pos, limits)
        }
    }

    fn name(&self) -> &str {
        "Chess Simulator v0.1"
    }

    fn new_game(&mut self) {
        self.random.new_game();
    }

    fn set_option(&mut self, name: &str, value: &str) -> bool {
        match name.to_ascii_lowercase().as_str() {
            "depth" => value
                .parse::<u8>()
                .ok()
                .is_some_and(|d| self.set_depth(d).is_ok()),
            "searchside" => match value.parse() {
                Ok(side) => {
                    self.config.search_side = side;
                    true
                }
                Err(_) => false,
            },
            "terminalscoring" => match value.parse() {
                Ok(scoring) => {
                    self.config.terminal_scoring = scoring;
                    true
                }
                Err(_) => false,
            },
            "honortimelimit" => match value.parse::<bool>() {
                Ok(honor) => {
                    self.config.honor_time_limit = honor;
                    true
                }
                Err(_) => false,
            },
            _ => false,
        }
    }
}

/// Chooses a move for `fen` with the default configuration: depth 3,
/// White searches, Black plays randomly.
pub fn choose_move(fen: &str, time_limit_ms: u64) -> Result<Option<String>, SimulatorError> {
    Simulator::default().choose_move(fen, Some(time_limit_ms))
}
