use std::fs;
use std::path::{Path, PathBuf};
use log::{debug, info};

use crate::common::{LedgerError, LedgerResult};
use crate::transaction::Transaction;

/// In-memory view of the trade store file. The whole file is loaded on open and rewritten on
/// every save, records are kept in insertion order.
#[derive(Debug)]
pub(crate) struct Database {
    transactions: Vec<Transaction>,
    file_path: PathBuf,
}

impl Database {
    pub(crate) fn new(file_path: PathBuf) -> Database {
        Database {
            transactions: vec![],
            file_path,
        }
    }

    /// Load the store at `path`. A missing or blank file is an empty store, anything else that
    /// fails to parse is an error.
    pub(crate) fn load(path: &Path) -> LedgerResult<Database> {
        if !path.exists() {
            info!("No store at {}, starting empty", path.display());
            return Ok(Database::new(path.to_path_buf()));
        }

        let content = fs::read_to_string(path).map_err(|e| LedgerError::store_read(path, e))?;
        if content.trim().is_empty() {
            return Ok(Database::new(path.to_path_buf()));
        }

        let transactions: Vec<Transaction> = serde_json::from_str(&content)
            .map_err(|e| LedgerError::store_read(path, e))?;
        info!("Loaded {} transactions from {}", transactions.len(), path.display());

        Ok(Database {
            transactions,
            file_path: path.to_path_buf(),
        })
    }

    /// Save db content to disk, replacing the previous file
    pub(crate) fn save(&self) -> LedgerResult<()> {
        let path = self.file_path.as_path();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| LedgerError::store_write(path, e))?;
            }
        }

        let encoded = serde_json::to_string_pretty(&self.transactions)
            .map_err(|e| LedgerError::store_write(path, e))?;
        fs::write(path, encoded).map_err(|e| LedgerError::store_write(path, e))?;
        info!("Saved {} transactions to {}", self.transactions.len(), path.display());
        Ok(())
    }

    /// Append a record in memory. Call `save` to persist it.
    pub(crate) fn append(&mut self, t: Transaction) {
        debug!("Appending {:?}", t);
        self.transactions.push(t);
    }

    pub(crate) fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub(crate) fn file_path(&self) -> &Path {
        &self.file_path
    }
}
