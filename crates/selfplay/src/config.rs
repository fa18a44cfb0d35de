//! Match configuration, loaded from TOML and overridden from the command line

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::SelfPlayError;

/// Configuration for a self-play match
///
/// Every field is optional in the TOML file; missing ones take the default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelfPlayConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Plies after which an unfinished game is declared drawn
    pub max_plies: u32,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
    /// Seed for the agents' random generators (None = fresh entropy)
    pub seed: Option<u64>,
    /// Where to write the JSON report
    pub output: Option<PathBuf>,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            max_plies: 400,
            alternate_colors: true,
            seed: None,
            output: None,
        }
    }
}

impl SelfPlayConfig {
    /// Parse a config from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self, SelfPlayError> {
        Ok(toml::from_str(text)?)
    }

    /// Load a config from a TOML file
    pub fn load(path: &Path) -> Result<Self, SelfPlayError> {
        let text = std::fs::read_to_string(path).map_err(|source| SelfPlayError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
