//! Session configuration loaded from TOML.

use crate::error::ConfigError;
use crate::players::{PlayerNames, default_name};
use crate::types::Mark;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for starting a session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Name bound to X.
    #[serde(default = "default_player_x")]
    player_x: String,

    /// Name bound to O.
    #[serde(default = "default_player_o")]
    player_o: String,
}

fn default_player_x() -> String {
    default_name(Mark::X)
}

fn default_player_o() -> String {
    default_name(Mark::O)
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            player_x: default_player_x(),
            player_o: default_player_o(),
        }
    }
}

impl SessionConfig {
    /// Creates a configuration with explicit names.
    #[instrument(skip(player_x, player_o))]
    pub fn new(player_x: impl Into<String>, player_o: impl Into<String>) -> Self {
        Self {
            player_x: player_x.into(),
            player_o: player_o.into(),
        }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(player_x = %config.player_x, player_o = %config.player_o, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Replaces whichever names are given.
    pub fn with_overrides(mut self, player_x: Option<String>, player_o: Option<String>) -> Self {
        if let Some(name) = player_x {
            self.player_x = name;
        }
        if let Some(name) = player_o {
            self.player_o = name;
        }
        self
    }

    /// Player names derived from this configuration.
    pub fn player_names(&self) -> PlayerNames {
        PlayerNames::new(&self.player_x, &self.player_o)
    }
}
