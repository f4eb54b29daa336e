//! Configuration management for the ledger tool

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Ledger configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// Directory holding the SPRINT-NNN.md files and the ledger file
    #[serde(default = "default_sprints_dir")]
    pub sprints_dir: PathBuf,

    /// Ledger file name, relative to the sprints directory
    #[serde(default = "default_ledger_file")]
    pub ledger_file: String,
}

fn default_sprints_dir() -> PathBuf {
    PathBuf::from("docs/sprints")
}

fn default_ledger_file() -> String {
    "ledger.json".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sprints_dir: default_sprints_dir(),
            ledger_file: default_ledger_file(),
        }
    }
}

impl Config {
    /// Load config from file, falling back to defaults when it does not exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Sprints directory, with a command-line override taking precedence
    pub fn sprints_dir(&self, dir_override: Option<&Path>) -> PathBuf {
        dir_override
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.sprints_dir.clone())
    }

    /// Full path of the ledger file inside the given sprints directory
    pub fn ledger_path(&self, sprints_dir: &Path) -> PathBuf {
        sprints_dir.join(&self.ledger_file)
    }
}
