//! Game configuration loaded from TOML.

use crate::games::vowels::{Catalog, CatalogError, POINTS_PER_CORRECT};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings for a play-through.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Points awarded per correct match or word.
    #[serde(default = "default_points")]
    points_per_correct: u32,

    /// Replacement content catalog; the built-in one is used when absent.
    #[serde(default)]
    catalog_path: Option<PathBuf>,

    /// Seed for tile and word shuffling; random when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Whether feedback cues and spoken guidance are rendered.
    #[serde(default = "default_narration")]
    narration: bool,
}

fn default_points() -> u32 {
    POINTS_PER_CORRECT
}

fn default_narration() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            points_per_correct: default_points(),
            catalog_path: None,
            seed: None,
            narration: default_narration(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml_str(&content)?;
        info!(
            points = config.points_per_correct,
            narration = config.narration,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Replaces the shuffle seed.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Turns narration off.
    pub fn without_narration(mut self) -> Self {
        self.narration = false;
        self
    }

    /// Loads the configured catalog, or the built-in one.
    #[instrument(skip(self))]
    pub fn load_catalog(&self) -> Result<Catalog, CatalogError> {
        match &self.catalog_path {
            Some(path) => Catalog::from_file(path),
            None => {
                debug!("Using built-in catalog");
                Ok(Catalog::builtin())
            }
        }
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
