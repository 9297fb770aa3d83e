//! Backing-file access
//!
//! The on-disk format is exactly what `serde_json::to_string_pretty`
//! produces for the document object: collection name to array of records,
//! 2-space indentation. Collections other than the one being saved pass
//! through a save untouched.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::observability::Logger;

use super::errors::StoreResult;

/// The full on-disk state: collection name -> JSON array of records.
pub type Document = Map<String, Value>;

/// Handle to the flat-file document store.
///
/// A `Store` holds no state beyond the path; every operation re-reads the
/// file, so two handles over the same path always observe the same bytes.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Create a store backed by the given file path.
    ///
    /// The file is created lazily on the first save; a store over a
    /// missing file behaves as an empty document.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the records stored under `key`.
    ///
    /// Returns an empty list when the file is missing, the key is absent,
    /// the key does not hold an array, or the document cannot be read or
    /// parsed. Failures are logged, never returned.
    pub fn load(&self, key: &str) -> Vec<Value> {
        match self.load_document().remove(key) {
            Some(Value::Array(records)) => records,
            _ => Vec::new(),
        }
    }

    /// Load the full document mapping, falling back to an empty document
    /// when the file cannot be read or parsed.
    pub fn load_document(&self) -> Document {
        match self.read_document() {
            Ok(document) => document,
            Err(e) => {
                Logger::error(
                    "store_read_failed",
                    &[
                        ("path", &self.path.display().to_string()),
                        ("error", &e.to_string()),
                    ],
                );
                Document::new()
            }
        }
    }

    /// Save `records` under `key` and overwrite the whole file.
    ///
    /// The document is re-read from disk first, so every other key is
    /// carried over as it currently exists on disk rather than from any
    /// earlier in-memory snapshot. Callers that must not interleave with
    /// other writers serialize above this layer.
    pub fn save(&self, key: &str, records: Vec<Value>) -> StoreResult<()> {
        let mut document = self.load_document();
        document.insert(key.to_string(), Value::Array(records));

        self.write_document(&document).map_err(|e| {
            Logger::error(
                "store_write_failed",
                &[
                    ("path", &self.path.display().to_string()),
                    ("error", &e.to_string()),
                ],
            );
            e
        })
    }

    fn read_document(&self) -> StoreResult<Document> {
        if !self.path.exists() {
            return Ok(Document::new());
        }
        let contents = fs::read_to_string(&self.path)?;
        let document: Document = serde_json::from_str(&contents)?;
        Ok(document)
    }

    fn write_document(&self, document: &Document) -> StoreResult<()> {
        let contents = serde_json::to_string_pretty(document)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn temp_store(dir: &TempDir) -> Store {
        Store::new(dir.path().join("db.json"))
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = temp_store(&dir);

        assert!(store.load("doors").is_empty());
        assert!(store.load_document().is_empty());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = temp_store(&dir);

        let records = vec![json!({"id": "a", "name": "Front"})];
        store.save("doors", records.clone()).unwrap();

        assert_eq!(store.load("doors"), records);
    }

    #[test]
    fn test_absent_key_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = temp_store(&dir);

        store.save("doors", vec![json!({"id": "a"})]).unwrap();

        assert!(store.load("windows").is_empty());
    }

    #[test]
    fn test_non_array_key_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = temp_store(&dir);
        fs::write(store.path(), r#"{"doors": {"not": "an array"}}"#).unwrap();

        assert!(store.load("doors").is_empty());
    }
}
