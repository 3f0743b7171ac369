//! Chess rules for the simulator: board state with make/unmake, legal move
//! generation, FEN and UCI notation, plus the traits engines plug into.

pub mod board;
pub mod fen;
pub mod movegen;
pub mod perft;
pub mod rules;
pub mod time_control;
pub mod types;
pub mod uci;

pub use board::*;
pub use fen::{FenError, STARTPOS_FEN};
pub use movegen::*;
pub use perft::perft;
pub use rules::Rules;
pub use time_control::*;
pub use types::*;
pub use uci::*;

// =============================================================================
// Engine trait: implemented by every move picker
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The chosen move (None if no legal moves)
    pub best_move: Option<Move>,
    /// Score in centipawns from the mover's perspective
    pub score: i32,
    /// Search depth used
    pub depth: u8,
    /// Number of nodes searched
    pub nodes: u64,
    /// Whether search was stopped early due to time limit
    pub stopped: bool,
}

impl SearchResult {
    /// Result for a position without legal moves.
    pub fn no_move(depth: u8) -> Self {
        Self {
            best_move: None,
            score: 0,
            depth,
            nodes: 0,
            stopped: false,
        }
    }
}

/// Trait that all chess engines must implement.
pub trait Engine: Send {
    /// Pick a move for the side to move in `pos`.
    fn search(&mut self, pos: &Position, limits: SearchLimits) -> SearchResult;

    /// Returns the engine's name for UCI identification
    fn name(&self) -> &str;

    /// Returns the engine's author for UCI identification
    fn author(&self) -> &str {
        "ML-chess"
    }

    /// Reset internal state for a new game.
    fn new_game(&mut self) {}

    /// Set a UCI option. Returns true if the option was recognized.
    fn set_option(&mut self, _name: &str, _value: &str) -> bool {
        false
    }
}
