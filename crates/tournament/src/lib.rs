//! Tournament Runner
//!
//! Plays engines against each other and records every game:
//! - Matches with alternating colors from a fixed start position
//! - Game-end detection (checkmate, stalemate, fifty-move rule, threefold
//!   repetition, insufficient material, ply cap)
//! - Move history in UCI notation and JSON result files
//!
//! # Usage
//!
//! ```bash
//! cargo run -p tournament -- match simulator random --games 20 --depth 3
//! ```

mod match_runner;
mod results;

pub use match_runner::*;
pub use results::*;
