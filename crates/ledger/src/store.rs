//! Ledger document and its JSON file
//!
//! The ledger is a single document, `{"sprints": {"001": {...}}}`, read
//! whole and written whole. There is no locking: the last writer wins.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::entry::{SprintEntry, SprintNumber};
use crate::error::LedgerError;

/// The ledger document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    /// Entries keyed by zero-padded sprint number
    #[serde(default)]
    pub sprints: BTreeMap<String, SprintEntry>,

    /// Top-level keys this tool does not know about
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Ledger {
    /// Look up the entry for a sprint
    pub fn get(&self, number: SprintNumber) -> Option<&SprintEntry> {
        self.sprints.get(&number.key())
    }

    /// Get the entry for a sprint, inserting an empty one if absent
    pub fn entry_mut(&mut self, number: SprintNumber) -> &mut SprintEntry {
        self.sprints.entry(number.key()).or_default()
    }

    /// Mark a sprint in progress. Completed sprints cannot be reopened and
    /// are left untouched.
    pub fn start(&mut self, number: SprintNumber, now: DateTime<Utc>) -> Result<&SprintEntry, LedgerError> {
        if self.get(number).is_some_and(SprintEntry::is_completed) {
            return Err(LedgerError::AlreadyCompleted(number.key()));
        }

        let entry = self.entry_mut(number);
        entry.mark_in_progress(now);
        Ok(entry)
    }

    /// Mark a sprint completed, whatever its current status
    pub fn complete(&mut self, number: SprintNumber, now: DateTime<Utc>) -> &SprintEntry {
        let entry = self.entry_mut(number);
        entry.mark_completed(now);
        entry
    }
}

/// Reads and writes the ledger file
pub struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the ledger, or an empty one if the file does not exist yet
    pub fn load(&self) -> Result<Ledger> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no ledger file, starting empty");
            return Ok(Ledger::default());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read ledger: {}", self.path.display()))?;

        let ledger: Ledger = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse ledger JSON: {}", self.path.display()))?;

        tracing::debug!(path = %self.path.display(), sprints = ledger.sprints.len(), "loaded ledger");
        Ok(ledger)
    }

    /// Write the whole ledger back: 2-space indent, trailing newline
    pub fn save(&self, ledger: &Ledger) -> Result<()> {
        let mut content = serde_json::to_string_pretty(ledger).context("Failed to serialize ledger")?;
        content.push('\n');

        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write ledger: {}", self.path.display()))?;

        tracing::debug!(path = %self.path.display(), sprints = ledger.sprints.len(), "saved ledger");
        Ok(())
    }
}
