//! JSON-file backed store (e.g. `~/.volcado/progress.json`).

use super::{KeyValueStore, StoreError, StoredValue};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Write-through store persisting the whole map as one JSON object.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: BTreeMap<String, StoredValue>,
    dirty: bool,
}

impl JsonFileStore {
    /// Open the store at `path`, creating its parent directory.
    ///
    /// A missing file opens empty. Values that are neither a bool nor a
    /// number are dropped per key with a warning. A file that does not parse
    /// as a JSON object is moved to `<name>.corrupt` and the store opens empty.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let values = match fs::read_to_string(&path) {
            Ok(json) => match serde_json::from_str::<BTreeMap<String, Value>>(&json) {
                Ok(raw) => convert_values(raw, &path),
                Err(e) => {
                    tracing::warn!("Ignoring corrupt progress file {}: {}", path.display(), e);
                    set_aside(&path);
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                tracing::warn!("Could not read progress file {}: {}", path.display(), e);
                BTreeMap::new()
            }
        };

        tracing::debug!("Opened progress store {} ({} keys)", path.display(), values.len());

        Ok(Self {
            path,
            values,
            dirty: false,
        })
    }

    fn save(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&self.values)?;

        // Write a sibling file then rename so a crash never truncates progress.
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json).map_err(|source| StoreError::Io {
            path: tmp_path.clone(),
            source,
        })?;
        fs::rename(&tmp_path, &self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        Ok(())
    }

    fn write_through(&mut self) {
        match self.save() {
            Ok(()) => self.dirty = false,
            Err(e) => {
                tracing::warn!("Failed to persist progress: {}", e);
                self.dirty = true;
            }
        }
    }
}

/// Keep every key whose value reads as a bool or a number. Fractional
/// numbers truncate toward zero.
fn convert_values(raw: BTreeMap<String, Value>, path: &Path) -> BTreeMap<String, StoredValue> {
    raw.into_iter()
        .filter_map(|(key, value)| {
            let stored = match &value {
                Value::Bool(b) => Some(StoredValue::Bool(*b)),
                Value::Number(n) => n
                    .as_i64()
                    .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f as i64))
                    .map(StoredValue::Int),
                _ => None,
            };
            if stored.is_none() {
                tracing::warn!("Dropping unreadable key {} = {} in {}", key, value, path.display());
            }
            stored.map(|v| (key, v))
        })
        .collect()
}

/// Move an unparseable file to `<name>.corrupt` so the next write does not
/// destroy it.
fn set_aside(path: &Path) {
    let mut backup = path.as_os_str().to_owned();
    backup.push(".corrupt");
    let backup = PathBuf::from(backup);
    match fs::rename(path, &backup) {
        Ok(()) => tracing::warn!("Moved corrupt progress file to {}", backup.display()),
        Err(e) => tracing::warn!("Could not move corrupt progress file aside: {}", e),
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<StoredValue> {
        self.values.get(key).copied()
    }

    fn set(&mut self, key: &str, value: StoredValue) {
        if self.values.get(key) == Some(&value) {
            return;
        }
        self.values.insert(key.to_string(), value);
        self.write_through();
    }

    fn remove(&mut self, key: &str) {
        if self.values.remove(key).is_some() {
            self.write_through();
        }
    }

    fn flush(&mut self) -> Result<(), StoreError> {
        if self.dirty {
            self.save()?;
            self.dirty = false;
        }
        Ok(())
    }
}
