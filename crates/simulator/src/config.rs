//! Simulator settings loaded from TOML.
//!
//! ```toml
//! depth = 3
//! search_side = "white"
//! time_limit_ms = 10000
//! honor_time_limit = true
//! terminal_scoring = "evaluate"
//! ```
//!
//! Every key is optional and falls back to [`SimulatorConfig::default`].

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chess_core::Color;
use minimax_engine::TerminalScoring;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default advisory budget for one move.
pub const DEFAULT_TIME_LIMIT_MS: u64 = 10_000;

/// Default search depth in plies.
pub const DEFAULT_DEPTH: u8 = 3;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("search depth must be at least 1, got {0}")]
    InvalidDepth(u8),
    #[error("unknown search side {0:?}, expected white, black or both")]
    InvalidSearchSide(String),
}

/// Which colors the simulator searches for. The other color plays a random
/// legal move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchSide {
    #[default]
    White,
    Black,
    Both,
}

impl SearchSide {
    pub fn searches(self, color: Color) -> bool {
        match self {
            SearchSide::White => color == Color::White,
            SearchSide::Black => color == Color::Black,
            SearchSide::Both => true,
        }
    }
}

impl FromStr for SearchSide {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "white" | "w" => Ok(SearchSide::White),
            "black" | "b" => Ok(SearchSide::Black),
            "both" => Ok(SearchSide::Both),
            _ => Err(ConfigError::InvalidSearchSide(s.to_string())),
        }
    }
}

impl fmt::Display for SearchSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SearchSide::White => "white",
            SearchSide::Black => "black",
            SearchSide::Both => "both",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulatorConfig {
    /// Search depth in plies
    pub depth: u8,
    pub search_side: SearchSide,
    /// Budget used when the caller does not pass one
    pub time_limit_ms: u64,
    /// Stop between root moves once the budget is spent
    pub honor_time_limit: bool,
    pub terminal_scoring: TerminalScoring,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            search_side: SearchSide::White,
            time_limit_ms: DEFAULT_TIME_LIMIT_MS,
            honor_time_limit: true,
            terminal_scoring: TerminalScoring::Evaluate,
        }
    }
}

impl SimulatorConfig {
    /// Reads and validates a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: SimulatorConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> String {
        // Plain scalars and enums only, serialization cannot fail.
        toml::to_string(self).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth == 0 {
            return Err(ConfigError::InvalidDepth(self.depth));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
