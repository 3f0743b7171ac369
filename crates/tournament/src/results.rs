//! Tournament results storage and reporting

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::match_runner::{MatchConfig, MatchResult};

#[derive(Debug, Error)]
pub enum ResultsError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed results file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Complete tournament results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentResults {
    /// Name/description of the tournament
    pub name: String,
    /// Participating engines
    pub participants: Vec<String>,
    /// All match results (indexed by participant pairs)
    pub matches: Vec<MatchEntry>,
    /// Configuration used
    pub config: TournamentConfig,
}

/// A single match entry in the tournament
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchEntry {
    pub engine1: String,
    pub engine2: String,
    pub result: MatchResult,
}

/// Tournament configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TournamentConfig {
    pub games_per_match: u32,
    pub search_depth: u8,
    pub max_moves_per_game: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub move_time_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_fen: Option<String>,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self::from(&MatchConfig::default())
    }
}

impl From<&MatchConfig> for TournamentConfig {
    fn from(config: &MatchConfig) -> Self {
        Self {
            games_per_match: config.num_games,
            search_depth: config.depth,
            max_moves_per_game: config.max_moves,
            move_time_ms: config.time_per_move.map(|t| t.as_millis() as u64),
            start_fen: config.start_fen.clone(),
        }
    }
}

impl TournamentResults {
    pub fn new(name: &str, participants: Vec<String>, config: TournamentConfig) -> Self {
        Self {
            name: name.to_string(),
            participants,
            matches: Vec::new(),
            config,
        }
    }

    /// Add a match result
    pub fn add_match(&mut self, engine1: &str, engine2: &str, result: MatchResult) {
        self.matches.push(MatchEntry {
            engine1: engine1.to_string(),
            engine2: engine2.to_string(),
            result,
        });
    }

    /// Save results to JSON file
    pub fn save(&self, path: &Path) -> Result<(), ResultsError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| ResultsError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load results from JSON file
    pub fn load(path: &Path) -> Result<Self, ResultsError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ResultsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Tournament: {} ===\n\n", self.name));
        report.push_str(&format!("Participants: {}\n", self.participants.join(", ")));
        report.push_str(&format!(
            "Config: {} games/match, depth {}, max {} plies\n\n",
            self.config.games_per_match, self.config.search_depth, self.config.max_moves_per_game
        ));

        report.push_str("Results:\n");
        report.push_str(&format!(
            "{:<20} vs {:<20} {:>5}-{:<5}-{:<5} {:>6}\n",
            "Engine 1", "Engine 2", "W", "L", "D", "Score"
        ));
        report.push_str(&"-".repeat(67));
        report.push('\n');

        for entry in &self.matches {
            report.push_str(&format!(
                "{:<20} vs {:<20} {:>5}-{:<5}-{:<5} {:>5.1}%\n",
                entry.engine1,
                entry.engine2,
                entry.result.wins,
                entry.result.losses,
                entry.result.draws,
                entry.result.score() * 100.0
            ));
        }

        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
