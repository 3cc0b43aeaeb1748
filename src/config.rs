//! Configuration for the games front end.

use derive_getters::Getters;
use derive_more::{Display, Error};
use pocket_tictactoe::SolverConfig;
use pocket_water_jug::{presets, JugConfiguration};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings read from `pocket_games.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GamesConfig {
    /// Games played by `tictactoe self-play` when no count is given.
    #[serde(default = "default_self_play_games")]
    self_play_games: u32,

    /// Heuristic switches for the tic-tac-toe solver.
    #[serde(default)]
    solver: SolverConfig,

    /// Water jug puzzles offered for a random round.
    #[serde(default = "default_jug_presets")]
    jug_presets: Vec<JugConfiguration>,
}

#[instrument]
fn default_jug_presets() -> Vec<JugConfiguration> {
    presets()
}

#[instrument]
fn default_self_play_games() -> u32 {
    100
}

impl GamesConfig {
    /// Creates a configuration from its parts.
    #[instrument(skip(jug_presets), fields(presets = jug_presets.len()))]
    pub fn new(solver: SolverConfig, jug_presets: Vec<JugConfiguration>, self_play_games: u32) -> Self {
        Self {
            self_play_games,
            solver,
            jug_presets,
        }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(
            presets = config.jug_presets.len(),
            self_play_games = config.self_play_games,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Renders the configuration as TOML.
    #[instrument(skip(self))]
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(|e| ConfigError::new(format!("Failed to render config: {}", e)))
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }
}

impl Default for GamesConfig {
    fn default() -> Self {
        Self::new(
            SolverConfig::default(),
            default_jug_presets(),
            default_self_play_games(),
        )
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
