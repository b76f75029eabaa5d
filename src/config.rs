//! Model configuration, persisted as TOML.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::graph::SearchStrategy;

/// Result type for config operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Configuration for building and querying a [`crate::wordnet::WordNet`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordNetConfig {
    /// SAP search strategy.
    pub search: SearchStrategy,
    /// Reject hypernym graphs with more than one root.
    pub require_single_root: bool,
    /// Default synset file for the CLI.
    pub synsets: Option<PathBuf>,
    /// Default hypernym file for the CLI.
    pub hypernyms: Option<PathBuf>,
}

impl Default for WordNetConfig {
    fn default() -> Self {
        Self {
            search: SearchStrategy::Bidirectional,
            require_single_root: false,
            synsets: None,
            hypernyms: None,
        }
    }
}

impl WordNetConfig {
    /// Load from a TOML file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Save to a TOML file.
    pub fn save(&self, path: &Path) -> ConfigResult<()> {
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::Write {
                path: parent.display().to_string(),
                source: e,
            })?;
        }
        std::fs::write(path, content).map_err(|e| ConfigError::Write {
            path: path.display().to_string(),
            source: e,
        })
    }
}
