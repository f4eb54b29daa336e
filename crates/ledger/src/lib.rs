//! ledger - Track the status of numbered sprint documents
//!
//! Every `SPRINT-NNN.md` file in the sprints directory is a sprint. Its
//! status lives in a small JSON ledger next to it:
//!
//! ```json
//! { "sprints": { "001": { "status": "in_progress", "started_at": "..." } } }
//! ```
//!
//! Commands:
//! - stats: Table of every discovered sprint joined with its ledger entry
//! - start NNN: Mark a sprint in_progress (refused once completed)
//! - complete NNN: Mark a sprint completed

pub mod commands;
pub mod discovery;
pub mod entry;
pub mod error;
pub mod report;
pub mod store;

pub use commands::Workspace;
pub use discovery::discover_sprints;
pub use entry::{SprintEntry, SprintNumber, SprintStatus};
pub use error::LedgerError;
pub use report::StatsRow;
pub use store::{Ledger, LedgerStore};
