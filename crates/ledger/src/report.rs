//! Stats report: discovered sprints joined with their ledger entries

use anyhow::{Context, Result};
use ledger_core::format::{self, GREEN, YELLOW};
use serde::Serialize;

use crate::entry::{SprintNumber, SprintStatus};
use crate::store::Ledger;

const RULE_WIDTH: usize = 72;

/// Placeholder for timestamps a sprint does not have yet
const NONE: &str = "-";

/// One line of the stats report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsRow {
    #[serde(rename = "sprint")]
    pub number: SprintNumber,
    pub status: SprintStatus,
    pub started_at: Option<String>,
    pub completed_at: Option<String>,
}

/// Join discovered sprint numbers with the ledger. Sprints without an entry
/// are reported as pending; ledger entries without a file are not reported.
pub fn build_rows(numbers: &[SprintNumber], ledger: &Ledger) -> Vec<StatsRow> {
    numbers
        .iter()
        .map(|&number| match ledger.get(number) {
            Some(entry) => StatsRow {
                number,
                status: entry.status(),
                started_at: entry.started_at.clone(),
                completed_at: entry.completed_at.clone(),
            },
            None => StatsRow {
                number,
                status: SprintStatus::Pending,
                started_at: None,
                completed_at: None,
            },
        })
        .collect()
}

fn status_cell(status: &SprintStatus, colors: bool) -> String {
    let padded = format!("{:<12}", status.as_str());
    match status {
        SprintStatus::Completed => format::color(GREEN, &padded, colors),
        SprintStatus::InProgress => format::color(YELLOW, &padded, colors),
        SprintStatus::Pending | SprintStatus::Other(_) => padded,
    }
}

fn timestamp_cell(ts: Option<&str>) -> &str {
    ts.unwrap_or(NONE)
}

/// Render the rows as a fixed-width text table
pub fn render_table(rows: &[StatsRow], colors: bool) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format!(
        "{:<8}  {:<12}  {:<22}  {:<22}",
        "Sprint", "Status", "Started", "Completed"
    ));
    lines.push("-".repeat(RULE_WIDTH));

    for row in rows {
        lines.push(format!(
            "SPRINT-{}  {}  {:<22}  {:<22}",
            row.number.key(),
            status_cell(&row.status, colors),
            timestamp_cell(row.started_at.as_deref()),
            timestamp_cell(row.completed_at.as_deref()),
        ));
    }

    lines
        .iter()
        .map(|line| line.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the rows as a pretty JSON array
pub fn render_json(rows: &[StatsRow]) -> Result<String> {
    serde_json::to_string_pretty(rows).context("Failed to serialize stats")
}
