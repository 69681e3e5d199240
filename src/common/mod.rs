use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors surfaced to the user. Every one of them ends the process with a non-zero exit code.
#[derive(Debug, Error)]
pub(crate) enum LedgerError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("unable to read store {}: {reason}", .path.display())]
    StoreRead { path: PathBuf, reason: String },

    #[error("unable to write store {}: {reason}", .path.display())]
    StoreWrite { path: PathBuf, reason: String },

    #[error("invalid config file {}: {reason}", .path.display())]
    Config { path: PathBuf, reason: String },

    #[error("unable to export to {}: {reason}", .path.display())]
    Export { path: PathBuf, reason: String },

    #[error("{0} is too large to compute")]
    Overflow(String),
}

impl LedgerError {
    pub(crate) fn store_read(path: &Path, reason: impl ToString) -> LedgerError {
        LedgerError::StoreRead { path: path.to_path_buf(), reason: reason.to_string() }
    }

    pub(crate) fn store_write(path: &Path, reason: impl ToString) -> LedgerError {
        LedgerError::StoreWrite { path: path.to_path_buf(), reason: reason.to_string() }
    }
}

/// Simplifies the return signature of fallible ledger operations
pub(crate) type LedgerResult<T> = Result<T, LedgerError>;
