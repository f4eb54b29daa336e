use thiserror::Error;

/// Errors raised by ledger operations
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Sprint {0} is already completed, cannot reopen.")]
    AlreadyCompleted(String),

    #[error("Invalid sprint number: {0:?} (expected a number like 001)")]
    InvalidSprintNumber(String),
}
