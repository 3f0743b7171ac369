//! Match runner for playing games between engines

use chess_core::{legal_moves, move_to_uci, Color, Engine, FenError, Position, SearchLimits};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum MatchError {
    #[error("invalid start position: {0}")]
    InvalidStartFen(#[from] FenError),
}

/// Result of a single game
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

impl GameResult {
    /// The same result seen from the other player.
    pub fn flipped(self) -> Self {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Loss => GameResult::Win,
            GameResult::Draw => GameResult::Draw,
        }
    }

    /// PGN-style result string, with `self` from White's point of view.
    pub fn as_pgn(self) -> &'static str {
        match self {
            GameResult::Win => "1-0",
            GameResult::Loss => "0-1",
            GameResult::Draw => "1/2-1/2",
        }
    }
}

/// Why a game ended.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    Checkmate,
    Stalemate,
    FiftyMoveRule,
    ThreefoldRepetition,
    InsufficientMaterial,
    /// The ply cap was reached.
    MoveLimit,
    /// An engine returned a move that is not legal; that side forfeits.
    IllegalMove,
}

/// One finished game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    pub white: String,
    pub black: String,
    pub start_fen: String,
    /// Moves in UCI notation, in playing order
    pub moves: Vec<String>,
    /// From White's point of view
    pub result: GameResult,
    pub termination: Termination,
}

/// Result of a match (multiple games)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    #[serde(default)]
    pub games: Vec<GameRecord>,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score from engine1's perspective (1 for win, 0.5 for draw, 0 for loss)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }

    fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
    }
}

/// Configuration for a match
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Search depth for engines
    pub depth: u8,
    /// Maximum time per move (None = no limit)
    pub time_per_move: Option<Duration>,
    /// Maximum plies per game before declaring a draw
    pub max_moves: u32,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
    /// Start position for every game (None = standard start)
    pub start_fen: Option<String>,
    /// Print progress during match
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            depth: 3,
            time_per_move: None,
            max_moves: 200,
            alternate_colors: true,
            start_fen: None,
            verbose: true,
        }
    }
}

impl MatchConfig {
    /// Create search limits based on this config
    fn search_limits(&self) -> SearchLimits {
        match self.time_per_move {
            Some(time) => SearchLimits::depth_and_time(self.depth, time),
            None => SearchLimits::depth(self.depth),
        }
    }
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
    start: Position,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Result<Self, MatchError> {
        let start = match &config.start_fen {
            Some(fen) => Position::from_fen(fen)?,
            None => Position::startpos(),
        };
        Ok(Self { config, start })
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Run a match between two engines
    ///
    /// Returns the result from engine1's perspective
    pub fn run_match(&self, engine1: &mut dyn Engine, engine2: &mut dyn Engine) -> MatchResult {
        let mut result = MatchResult::new();

        for game_num in 0..self.config.num_games {
            // Alternate colors if configured
            let engine1_white = !self.config.alternate_colors || game_num % 2 == 0;

            let (game, game_result) = if engine1_white {
                let game = self.play_game(engine1, engine2);
                let r = game.result;
                (game, r)
            } else {
                // Flip result since engine1 is black
                let game = self.play_game(engine2, engine1);
                let r = game.result.flipped();
                (game, r)
            };

            result.record(game_result);

            if self.config.verbose {
                let color = if engine1_white { "W" } else { "B" };
                println!(
                    "Game {}/{}: {} ({}) {:?} after {} plies - Score: {}-{}-{}",
                    game_num + 1,
                    self.config.num_games,
                    game.result.as_pgn(),
                    color,
                    game.termination,
                    game.moves.len(),
                    result.wins,
                    result.losses,
                    result.draws
                );
            }

            result.games.push(game);
        }

        result
    }

    /// Play a single game, result from White's point of view
    pub fn play_game(&self, white: &mut dyn Engine, black: &mut dyn Engine) -> GameRecord {
        let mut pos = self.start.clone();
        white.new_game();
        black.new_game();

        let mut record = GameRecord {
            white: white.name().to_string(),
            black: black.name().to_string(),
            start_fen: pos.to_fen(),
            moves: Vec::new(),
            result: GameResult::Draw,
            termination: Termination::MoveLimit,
        };

        let mut seen: HashMap<u64, u32> = HashMap::new();
        seen.insert(pos.position_key(), 1);

        let (result, termination) = loop {
            if let Some(end) = game_over(&pos) {
                break end;
            }
            if record.moves.len() as u32 >= self.config.max_moves {
                break (GameResult::Draw, Termination::MoveLimit);
            }

            // Create fresh search limits for each move (resets the clock)
            let limits = self.config.search_limits();
            let mover = pos.side_to_move;
            let search = if mover == Color::White {
                white.search(&pos, limits)
            } else {
                black.search(&pos, limits)
            };

            let legal = legal_moves(&pos);
            let mv = match search.best_move {
                Some(mv) if legal.contains(&mv) => mv,
                other => {
                    warn!(?mover, mv = ?other, fen = %pos.to_fen(), "engine forfeits with an illegal move");
                    let loser = if mover == Color::White {
                        GameResult::Loss
                    } else {
                        GameResult::Win
                    };
                    break (loser, Termination::IllegalMove);
                }
            };

            pos.make_move(mv);
            record.moves.push(move_to_uci(mv));

            let count = seen.entry(pos.position_key()).or_insert(0);
            *count += 1;
            if *count >= 3 {
                break (GameResult::Draw, Termination::ThreefoldRepetition);
            }
        };

        debug!(
            white = %record.white,
            black = %record.black,
            plies = record.moves.len(),
            ?result,
            ?termination,
            "game finished"
        );

        record.result = result;
        record.termination = termination;
        record
    }
}

/// Game end that does not depend on history, from White's point of view.
pub fn game_over(pos: &Position) -> Option<(GameResult, Termination)> {
    if legal_moves(pos).is_empty() {
        return Some(if pos.in_check(pos.side_to_move) {
            // Checkmate - current side loses
            let result = if pos.side_to_move == Color::White {
                GameResult::Loss
            } else {
                GameResult::Win
            };
            (result, Termination::Checkmate)
        } else {
            (GameResult::Draw, Termination::Stalemate)
        });
    }
    if pos.is_insufficient_material() {
        return Some((GameResult::Draw, Termination::InsufficientMaterial));
    }
    if pos.is_fifty_move_draw() {
        return Some((GameResult::Draw, Termination::FiftyMoveRule));
    }
    None
}

/// Quick utility to run a single match
pub fn quick_match(
    engine1: &mut dyn Engine,
    engine2: &mut dyn Engine,
    num_games: u32,
    depth: u8,
) -> MatchResult {
    let config = MatchConfig {
        num_games,
        depth,
        verbose: false,
        ..Default::default()
    };
    let runner = MatchRunner {
        config,
        start: Position::startpos(),
    };
    runner.run_match(engine1, engine2)
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
