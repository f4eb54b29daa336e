//! Ledger Core - Shared functionality for the sprint ledger tool
//!
//! Standard paths, configuration loading and terminal formatting.

pub mod config;
pub mod format;
pub mod paths;

pub use config::Config;
pub use paths::Paths;
