//! Flat key-value persistence.
//!
//! Progress is stored as a single flat map of string keys to booleans and
//! integers. Reads never fail: a missing key reads as `false` / `0`.

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Errors raised by the persistence layer.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not encode progress: {0}")]
    Json(#[from] serde_json::Error),
}

/// A single persisted value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredValue {
    Bool(bool),
    Int(i64),
}

/// Backing store for progress data.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<StoredValue>;

    fn set(&mut self, key: &str, value: StoredValue);

    fn remove(&mut self, key: &str);

    /// Push pending writes to durable storage.
    fn flush(&mut self) -> Result<(), StoreError> {
        Ok(())
    }

    fn get_bool(&self, key: &str) -> bool {
        match self.get(key) {
            Some(StoredValue::Bool(b)) => b,
            Some(StoredValue::Int(n)) => n != 0,
            None => false,
        }
    }

    fn set_bool(&mut self, key: &str, value: bool) {
        self.set(key, StoredValue::Bool(value));
    }

    fn get_int(&self, key: &str) -> i64 {
        match self.get(key) {
            Some(StoredValue::Int(n)) => n,
            Some(StoredValue::Bool(b)) => i64::from(b),
            None => 0,
        }
    }

    fn set_int(&mut self, key: &str, value: i64) {
        self.set(key, StoredValue::Int(value));
    }
}
