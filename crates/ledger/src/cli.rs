//! CLI command definitions

use clap::{Parser, Subcommand};
use ledger::SprintNumber;
use std::path::PathBuf;

/// ledger - Track the status of numbered sprint documents
#[derive(Parser, Debug)]
#[command(name = "ledger")]
#[command(version)]
#[command(about = "Track the status of SPRINT-NNN.md documents")]
#[command(after_help = "EXAMPLES:\n\
    ledger stats                  # Table of all sprints and their status\n\
    ledger start 004              # Mark SPRINT-004 in_progress\n\
    ledger complete 4             # Mark SPRINT-004 completed\n\
    ledger --dir plan/sprints stats\n\n\
CONFIG:\n\
    ~/.config/ledger/config.json may set \"sprints_dir\" and \"ledger_file\".\n\
    --dir overrides the configured sprints directory.")]
pub struct Cli {
    /// Directory holding SPRINT-NNN.md files and the ledger
    #[arg(long, global = true, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show every sprint with its status and timestamps
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Mark a sprint in progress (refused once completed)
    Start {
        /// Sprint number, e.g. 004 or 4
        #[arg(value_name = "NNN")]
        number: SprintNumber,
    },

    /// Mark a sprint completed
    Complete {
        /// Sprint number, e.g. 004 or 4
        #[arg(value_name = "NNN")]
        number: SprintNumber,
    },
}
