//! Prize persistence behind an injected store.
//!
//! The registry lives in a single JSON file under ~/.mystery-box/. The store
//! is a trait so the app and tests can run against an in-memory stub instead
//! of the real filesystem.

#![allow(dead_code)]
use crate::constants::{DATA_DIR_NAME, PRIZES_FILE};
use crate::prizes::Prize;
use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Key-value persistence for the serialized prize registry.
///
/// `load` returns `None` for absent or malformed state; callers fall back
/// silently to the default prize set.
pub trait PrizeStore {
    fn load(&self) -> Option<Vec<Prize>>;
    fn save(&self, prizes: &[Prize]) -> io::Result<()>;
}

/// File-backed store: pretty-printed JSON at ~/.mystery-box/prizes.json.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store rooted in the user's home directory, creating ~/.mystery-box/
    /// if needed.
    pub fn new() -> io::Result<Self> {
        let home_dir = dirs::home_dir().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "Could not determine home directory",
            )
        })?;
        let dir = home_dir.join(DATA_DIR_NAME);
        fs::create_dir_all(&dir)?;
        Ok(Self {
            path: dir.join(PRIZES_FILE),
        })
    }

    /// Store at an explicit path (tests and tooling).
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl PrizeStore for JsonFileStore {
    fn load(&self) -> Option<Vec<Prize>> {
        let json = fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&json).ok()
    }

    fn save(&self, prizes: &[Prize]) -> io::Result<()> {
        let json = serde_json::to_string_pretty(prizes)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(&self.path, json)
    }
}

/// In-memory stub store. Holds the serialized form so tests exercise the
/// same round-trip path as the file store.
#[derive(Default)]
pub struct MemoryStore {
    contents: RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stub pre-seeded with raw contents, valid or not.
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: RefCell::new(Some(contents.into())),
        }
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.borrow().clone()
    }
}

impl PrizeStore for MemoryStore {
    fn load(&self) -> Option<Vec<Prize>> {
        let contents = self.contents.borrow();
        serde_json::from_str(contents.as_deref()?).ok()
    }

    fn save(&self, prizes: &[Prize]) -> io::Result<()> {
        let json = serde_json::to_string_pretty(prizes)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        *self.contents.borrow_mut() = Some(json);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prizes::default_prizes;

    #[test]
    fn memory_store_roundtrip_preserves_order_and_values() {
        let store = MemoryStore::new();
        let prizes = default_prizes();

        store.save(&prizes).expect("save should succeed");
        let loaded = store.load().expect("load should succeed");

        assert_eq!(loaded, prizes);
    }

    #[test]
    fn memory_store_empty_loads_none() {
        let store = MemoryStore::new();
        assert!(store.load().is_none());
    }

    #[test]
    fn malformed_contents_load_none() {
        let store = MemoryStore::with_contents("not json at all {");
        assert!(store.load().is_none());
    }

    #[test]
    fn file_store_roundtrip() {
        let path = std::env::temp_dir().join("mystery_box_storage_test.json");
        let store = JsonFileStore::with_path(path.clone());
        let prizes = default_prizes();

        store.save(&prizes).expect("save should succeed");
        let loaded = store.load().expect("load should succeed");
        assert_eq!(loaded, prizes);

        // Cleanup
        fs::remove_file(path).ok();
    }

    #[test]
    fn file_store_missing_file_loads_none() {
        let store =
            JsonFileStore::with_path(std::env::temp_dir().join("mystery_box_missing_98765.json"));
        assert!(store.load().is_none());
    }

    #[test]
    fn saved_file_uses_stable_field_names() {
        let path = std::env::temp_dir().join("mystery_box_field_names_test.json");
        let store = JsonFileStore::with_path(path.clone());
        store.save(&default_prizes()).expect("save should succeed");

        let json = fs::read_to_string(&path).expect("file exists");
        assert!(json.contains("\"id\""));
        assert!(json.contains("\"name\""));
        assert!(json.contains("\"probability\""));

        fs::remove_file(path).ok();
    }
}
