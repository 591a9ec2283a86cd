//! Key-value storage backends
//!
//! The ledger persists through a minimal `get`/`set` interface so the same
//! logic runs against files on disk or an in-memory map.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::{FinanceError, FinanceResult};

use super::file_io::{read_string, write_atomic};

/// Durable key-value storage holding opaque text blobs
pub trait KeyValueStore {
    /// Read the blob stored under `key`, if any
    fn get(&self, key: &str) -> FinanceResult<Option<String>>;

    /// Store `value` under `key`, replacing whatever was there
    fn set(&mut self, key: &str, value: &str) -> FinanceResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> FinanceResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> FinanceResult<()> {
        (**self).set(key, value)
    }
}

/// Check that a key can be used as a file name on every platform
fn validate_key(key: &str) -> FinanceResult<()> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));

    if valid {
        Ok(())
    } else {
        Err(FinanceError::Storage(format!("Invalid storage key: '{}'", key)))
    }
}

/// Stores each key as `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Directory holding the key files
    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    /// Path of the file backing a key
    pub fn path_for(&self, key: &str) -> FinanceResult<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> FinanceResult<Option<String>> {
        read_string(self.path_for(key)?)
    }

    fn set(&mut self, key: &str, value: &str) -> FinanceResult<()> {
        write_atomic(self.path_for(key)?, value.as_bytes())
    }
}

/// In-memory store, nothing survives the process
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> FinanceResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> FinanceResult<()> {
        validate_key(key)?;
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
