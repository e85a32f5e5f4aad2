//! Application configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use perfect_tictactoe::{Mark, SearchConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Config file read from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "perfect_tictactoe.toml";

/// Top-level configuration.
///
/// ```toml
/// [search]
/// pruning = "alpha-beta"
/// transposition = true
/// opening_book = true
///
/// [play]
/// human = "O"
/// ```
#[derive(Debug, Clone, Default, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Search settings for the computer player.
    search: SearchConfig,

    /// Interactive game settings.
    play: PlayConfig,
}

/// Interactive game settings.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayConfig {
    /// Mark the human plays.
    human: Mark,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self { human: Mark::X }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read config file: {}", e))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            ConfigError::new(format!("Failed to parse config: {}", e))
        })?;

        info!(pruning = %config.search.pruning, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the given file, or the default file if it exists, or defaults.
    ///
    /// An explicitly named file must exist.
    #[instrument(skip(path))]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::from_file(DEFAULT_CONFIG_FILE)
            }
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Returns the search settings for modification by command-line overrides.
    pub fn search_mut(&mut self) -> &mut SearchConfig {
        &mut self.search
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
