//! Storage layer for my-finances
//!
//! A key-value seam (`KeyValueStore`) with a file-backed and an in-memory
//! implementation, atomic file writes, and the repository that maps the
//! transaction sequence onto a single stored blob.

pub mod file_io;
pub mod kv;
pub mod transactions;

pub use file_io::{read_json, write_atomic, write_json_atomic};
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use transactions::{TransactionRepository, QUARANTINE_KEY, SCHEMA_VERSION, TRANSACTIONS_KEY};

use crate::config::paths::FinancePaths;
use crate::error::FinanceError;

/// Open the file store under the data directory, creating directories as needed
pub fn open_file_store(paths: &FinancePaths) -> Result<FileStore, FinanceError> {
    paths.ensure_directories()?;
    Ok(FileStore::new(paths.data_dir()))
}
