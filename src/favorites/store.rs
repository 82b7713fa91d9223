use camino::{Utf8Path, Utf8PathBuf};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::Write;
use tempfile::NamedTempFile;
use thiserror::Error;

/// Errors raised by key-value stores.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to access storage file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Storage file is not a JSON object of strings: {0}")]
    FormatError(#[from] serde_json::Error),
}

/// A string-keyed, string-valued store that survives process restarts.
pub trait KeyValueStore: Send {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError>;
}

/// Process-local store, mostly useful for tests and hosts without a disk.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}

/// A store backed by a single JSON object file.
///
/// The whole file is rewritten on every [`KeyValueStore::set`], through a
/// temporary file in the same directory that is renamed over the original.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: Utf8PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens the store at `path`.
    ///
    /// A missing, empty or unparseable file is treated as empty; the next
    /// write replaces it. Only I/O failures other than "not found" are errors.
    pub fn open(path: impl AsRef<Utf8Path>) -> Result<Self, StorageError> {
        let path = path.as_ref().to_path_buf();
        let entries = match fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => BTreeMap::new(),
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!("Ignoring malformed storage file {}: {}", path, e);
                BTreeMap::new()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(StorageError::IoError(e)),
        };
        Ok(FileStore { path, entries })
    }

    pub fn path(&self) -> &Utf8Path {
        &self.path
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value);
        let content = serde_json::to_string_pretty(&self.entries)?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_str().is_empty() => parent,
            _ => Utf8Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_file(temp_dir: &TempDir, name: &str) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(temp_dir.path().join(name)).unwrap()
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new().with_entry("a", "1");
        assert_eq!(store.get("a").as_deref(), Some("1"));
        assert!(store.get("b").is_none());
        store.set("b", "2".to_string()).unwrap();
        assert_eq!(store.get("b").as_deref(), Some("2"));
    }

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::open(temp_file(&temp_dir, "storage.json")).unwrap();
        assert!(store.get("recipeFavorites").is_none());
    }

    #[test]
    fn test_file_store_persists_between_opens() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_file(&temp_dir, "storage.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set("recipeFavorites", "[1,2]".to_string()).unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("recipeFavorites").as_deref(), Some("[1,2]"));
        assert_eq!(reopened.path(), path.as_path());
    }

    #[test]
    fn test_file_store_malformed_file_starts_empty() {
        let temp_dir = TempDir::new().unwrap();
        for content in ["[1, 2, 3]", r#"{"recipeFavorites": "[1,"#, "{\"a\": 1}"] {
            let path = temp_file(&temp_dir, "storage.json");
            fs::write(&path, content).unwrap();

            let store = FileStore::open(&path).unwrap();
            assert!(
                store.get("recipeFavorites").is_none(),
                "Expected empty store for {:?}",
                content
            );
        }
    }

    #[test]
    fn test_file_store_overwrites_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_file(&temp_dir, "storage.json");
        fs::write(&path, r#"{"recipeFavorites": "[1,"#).unwrap();

        let mut store = FileStore::open(&path).unwrap();
        store.set("recipeFavorites", "[4]".to_string()).unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("recipeFavorites").as_deref(), Some("[4]"));
        // Only the storage file remains; the temporary file was renamed over it
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_file_store_write_failure() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_file(&temp_dir, "missing-dir/storage.json");

        let mut store = FileStore::open(&path).unwrap();
        let result = store.set("k", "v".to_string());
        assert!(matches!(result, Err(StorageError::IoError(_))));
    }
}
