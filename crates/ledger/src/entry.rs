//! Sprint entry types
//!
//! A sprint is identified by its number and recorded in the ledger under the
//! zero-padded key ("001"). Entries carry a status and the two timestamps.

use chrono::{DateTime, Utc};
use ledger_core::format;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LedgerError;

/// Status of a sprint
///
/// Statuses this tool does not write are kept verbatim in `Other` so that a
/// hand-edited ledger still loads and shows them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SprintStatus {
    /// Not started yet, also the status of sprints missing from the ledger
    #[default]
    Pending,
    InProgress,
    Completed,
    Other(String),
}

impl SprintStatus {
    pub fn as_str(&self) -> &str {
        match self {
            SprintStatus::Pending => "pending",
            SprintStatus::InProgress => "in_progress",
            SprintStatus::Completed => "completed",
            SprintStatus::Other(s) => s,
        }
    }
}

impl From<String> for SprintStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "pending" => SprintStatus::Pending,
            "in_progress" => SprintStatus::InProgress,
            "completed" => SprintStatus::Completed,
            _ => SprintStatus::Other(s),
        }
    }
}

impl From<SprintStatus> for String {
    fn from(status: SprintStatus) -> Self {
        match status {
            SprintStatus::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for SprintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sprint number, e.g. 7 for SPRINT-007.md
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SprintNumber(pub u32);

impl SprintNumber {
    /// Ledger key: at least three digits, zero padded
    pub fn key(&self) -> String {
        format!("{:03}", self.0)
    }

    /// Name of the sprint document, e.g. SPRINT-007.md
    pub fn file_name(&self) -> String {
        format!("SPRINT-{}.md", self.key())
    }
}

impl fmt::Display for SprintNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03}", self.0)
    }
}

impl Serialize for SprintNumber {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.key())
    }
}

impl FromStr for SprintNumber {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(SprintNumber)
            .map_err(|_| LedgerError::InvalidSprintNumber(s.to_string()))
    }
}

/// Ledger record for a single sprint
///
/// Timestamps are kept as the text found in the file; only the ones this
/// tool stamps are written in its own `YYYY-MM-DDTHH:MM:SSZ` form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SprintEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<SprintStatus>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,

    /// Keys this tool does not know about, kept as-is on save
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl SprintEntry {
    /// Effective status; entries without one are pending
    pub fn status(&self) -> SprintStatus {
        self.status.clone().unwrap_or_default()
    }

    pub fn is_completed(&self) -> bool {
        self.status == Some(SprintStatus::Completed)
    }

    /// Mark in progress, keeping an existing start time
    pub fn mark_in_progress(&mut self, now: DateTime<Utc>) {
        self.status = Some(SprintStatus::InProgress);
        self.started_at.get_or_insert_with(|| format::timestamp(now));
    }

    /// Mark completed, backfilling the start time if it was never started
    pub fn mark_completed(&mut self, now: DateTime<Utc>) {
        self.status = Some(SprintStatus::Completed);
        self.started_at.get_or_insert_with(|| format::timestamp(now));
        self.completed_at = Some(format::timestamp(now));
    }
}
