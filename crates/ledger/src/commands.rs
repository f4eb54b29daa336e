//! Ledger commands
//!
//! Each command returns the text to print so the binary stays a thin shell
//! over these functions.

use anyhow::Result;
use chrono::{DateTime, Utc};
use ledger_core::Config;
use std::path::{Path, PathBuf};

use crate::discovery::discover_sprints;
use crate::entry::SprintNumber;
use crate::report;
use crate::store::LedgerStore;

/// A sprints directory and the ledger file that tracks it
pub struct Workspace {
    sprints_dir: PathBuf,
    store: LedgerStore,
}

impl Workspace {
    pub fn new(sprints_dir: &Path, ledger_path: &Path) -> Self {
        Self {
            sprints_dir: sprints_dir.to_path_buf(),
            store: LedgerStore::new(ledger_path),
        }
    }

    /// Resolve the workspace from config, with an optional directory override
    pub fn from_config(config: &Config, dir_override: Option<&Path>) -> Self {
        let sprints_dir = config.sprints_dir(dir_override);
        let ledger_path = config.ledger_path(&sprints_dir);
        Self::new(&sprints_dir, &ledger_path)
    }

    pub fn sprints_dir(&self) -> &Path {
        &self.sprints_dir
    }

    pub fn store(&self) -> &LedgerStore {
        &self.store
    }

    /// Path of the document for a sprint, whether or not it exists
    pub fn sprint_file(&self, number: SprintNumber) -> PathBuf {
        self.sprints_dir.join(number.file_name())
    }

    fn warn_if_missing(&self, number: SprintNumber) {
        let path = self.sprint_file(number);
        if !path.exists() {
            tracing::warn!(path = %path.display(), "no document for sprint {}", number);
        }
    }

    /// Table (or JSON) of every discovered sprint with its ledger status
    pub fn stats(&self, json: bool, colors: bool) -> Result<String> {
        let ledger = self.store.load()?;
        let numbers = discover_sprints(&self.sprints_dir)?;
        let rows = report::build_rows(&numbers, &ledger);

        if json {
            return report::render_json(&rows);
        }

        if rows.is_empty() {
            return Ok(format!(
                "No SPRINT-NNN.md files found in {}",
                self.sprints_dir.display()
            ));
        }

        Ok(report::render_table(&rows, colors))
    }

    /// Mark a sprint in progress. Fails without writing if it is completed.
    pub fn start(&self, number: SprintNumber, now: DateTime<Utc>) -> Result<String> {
        self.warn_if_missing(number);
        let mut ledger = self.store.load()?;
        ledger.start(number, now)?;
        self.store.save(&ledger)?;

        tracing::info!(sprint = %number, "sprint started");
        Ok(format!("Sprint {} marked in_progress.", number.key()))
    }

    /// Mark a sprint completed
    pub fn complete(&self, number: SprintNumber, now: DateTime<Utc>) -> Result<String> {
        self.warn_if_missing(number);
        let mut ledger = self.store.load()?;
        ledger.complete(number, now);
        self.store.save(&ledger)?;

        tracing::info!(sprint = %number, "sprint completed");
        Ok(format!("Sprint {} marked completed.", number.key()))
    }
}
