//! ledger - Track the status of numbered sprint documents
//!
//! Usage:
//!   ledger stats [--json]       Show every SPRINT-NNN.md with its status
//!   ledger start NNN            Mark a sprint in_progress
//!   ledger complete NNN         Mark a sprint completed

mod cli;

use anyhow::Result;
use clap::Parser;
use ledger::Workspace;
use ledger_core::{format, Config, Paths};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Usage errors exit 1, help and version exit 0
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    let config = Config::load(&Paths::new().config_file())?;
    let workspace = Workspace::from_config(&config, cli.dir.as_deref());
    tracing::debug!(
        sprints_dir = %workspace.sprints_dir().display(),
        ledger = %workspace.store().path().display(),
        "resolved workspace"
    );

    let output = match cli.command {
        Commands::Stats { json } => workspace.stats(json, !json && format::use_colors())?,
        Commands::Start { number } => workspace.start(number, format::now())?,
        Commands::Complete { number } => workspace.complete(number, format::now())?,
    };

    println!("{}", output);
    Ok(())
}
