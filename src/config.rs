//! Game configuration.
//!
//! Settings come from an optional TOML file, then the environment, then the
//! command line, each layer overriding the last.

use crate::games::jeopardy::BoardShape;
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Environment variable overriding [`GameConfig::api_url`].
pub const API_URL_ENV: &str = "STRICTLY_JEOPARDY_API_URL";

/// Configuration for a trivia board.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct GameConfig {
    /// Base URL of the clue service.
    api_url: String,

    /// Number of category columns.
    categories_per_board: usize,

    /// Number of clues per column.
    clues_per_category: usize,

    /// Number of candidate categories requested before sampling.
    category_pool_size: usize,

    /// Fixed seed for reproducible boards.
    #[setters(strip_option)]
    seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        let shape = BoardShape::default();
        Self {
            api_url: "https://rithm-jeopardy.herokuapp.com/api/".to_string(),
            categories_per_board: shape.categories_per_board,
            clues_per_category: shape.clues_per_category,
            category_pool_size: shape.category_pool_size,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    ///
    /// Fields missing from the file keep their defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(api_url = %config.api_url, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, defaults otherwise.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies overrides from the process environment.
    pub fn apply_env(self) -> Self {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    /// Applies overrides using `lookup` to read variables.
    #[instrument(skip_all)]
    pub fn apply_env_with(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup(API_URL_ENV).filter(|u| !u.trim().is_empty()) {
            debug!(api_url = %url, "API URL overridden from environment");
            self.api_url = url;
        }
        self
    }

    /// Checks that the board shape can hold at least one clue.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.categories_per_board == 0 {
            return Err(ConfigError::new("categories_per_board must be at least 1"));
        }
        if self.clues_per_category == 0 {
            return Err(ConfigError::new("clues_per_category must be at least 1"));
        }
        if self.category_pool_size < self.categories_per_board {
            return Err(ConfigError::new(format!(
                "category_pool_size ({}) is smaller than categories_per_board ({})",
                self.category_pool_size, self.categories_per_board
            )));
        }
        if self.api_url.trim().is_empty() {
            return Err(ConfigError::new("api_url must not be empty"));
        }
        Ok(())
    }

    /// Returns the board shape described by this config.
    pub fn shape(&self) -> BoardShape {
        BoardShape::new(
            self.categories_per_board,
            self.clues_per_category,
            self.category_pool_size,
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
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
