// crates/geoselect-core/src/storage.rs
//! Persisting the [`Selection`] in a [`SelectionStore`] slot.
use crate::common::Selection;
use crate::error::Result;
use crate::traits::SelectionStore;
use std::collections::HashMap;
use tracing::warn;

/// Writes `selection` as JSON into `key`, replacing whatever was there.
pub fn save_selection<P: SelectionStore + ?Sized>(
    store: &mut P,
    key: &str,
    selection: &Selection,
) -> Result<()> {
    let payload = serde_json::to_string(selection)?;
    store.set(key, &payload)
}

/// Reads the selection stored under `key`.
///
/// A missing slot or a payload that does not parse yields an empty
/// selection; missing fields read as empty strings.
pub fn load_saved_selection<P: SelectionStore + ?Sized>(store: &P, key: &str) -> Selection {
    let Some(raw) = store.get(key) else {
        return Selection::default();
    };
    match serde_json::from_str::<Selection>(&raw) {
        Ok(selection) => selection,
        Err(e) => {
            warn!(key, error = %e, "ignoring unreadable saved selection");
            Selection::default()
        }
    }
}

pub fn clear_saved_selection<P: SelectionStore + ?Sized>(store: &mut P, key: &str) -> Result<()> {
    store.remove(key)
}

/// Process-local store, gone when dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl SelectionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.slots.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.slots.remove(key);
        Ok(())
    }
}

#[cfg(feature = "fs")]
pub use file_store::FileStore;

#[cfg(feature = "fs")]
mod file_store {
    use crate::error::{GeoError, Result};
    use crate::traits::SelectionStore;
    use serde_json::{Map, Value};
    use std::fs;
    use std::path::{Path, PathBuf};

    /// A JSON object on disk mapping slot keys to their string values.
    ///
    /// Every write rewrites the whole file through a temporary sibling and a
    /// rename, so readers never observe a half-written object.
    #[derive(Debug, Clone)]
    pub struct FileStore {
        path: PathBuf,
    }

    impl FileStore {
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        pub fn path(&self) -> &Path {
            &self.path
        }

        fn read_all(&self) -> Map<String, Value> {
            fs::read_to_string(&self.path)
                .ok()
                .and_then(|raw| serde_json::from_str(&raw).ok())
                .unwrap_or_default()
        }

        fn write_all(&self, slots: &Map<String, Value>) -> Result<()> {
            if let Some(parent) = self.path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            let body = serde_json::to_string_pretty(slots)?;
            let mut tmp = self.path.as_os_str().to_owned();
            tmp.push(".tmp");
            let tmp = PathBuf::from(tmp);
            fs::write(&tmp, body)?;
            fs::rename(&tmp, &self.path).map_err(|e| {
                GeoError::Storage(format!("cannot replace {}: {e}", self.path.display()))
            })
        }
    }

    impl SelectionStore for FileStore {
        fn get(&self, key: &str) -> Option<String> {
            match self.read_all().remove(key) {
                Some(Value::String(s)) => Some(s),
                _ => None,
            }
        }

        fn set(&mut self, key: &str, value: &str) -> Result<()> {
            let mut slots = self.read_all();
            slots.insert(key.to_string(), Value::String(value.to_string()));
            self.write_all(&slots)
        }

        fn remove(&mut self, key: &str) -> Result<()> {
            let mut slots = self.read_all();
            if slots.remove(key).is_some() {
                self.write_all(&slots)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_memory() {
        let mut store = MemoryStore::new();
        let s = Selection::new("US", "CA", "LA");
        save_selection(&mut store, "selection", &s).unwrap();
        assert_eq!(load_saved_selection(&store, "selection"), s);
    }

    #[test]
    fn clear_then_load_is_empty() {
        let mut store = MemoryStore::new();
        save_selection(&mut store, "selection", &Selection::new("US", "", "")).unwrap();
        clear_saved_selection(&mut store, "selection").unwrap();
        assert!(load_saved_selection(&store, "selection").is_empty());
        assert!(store.is_empty());
    }

    #[test]
    fn garbage_payload_reads_as_empty() {
        let mut store = MemoryStore::new();
        store.set("selection", "{not json").unwrap();
        assert_eq!(load_saved_selection(&store, "selection"), Selection::default());
    }

    #[test]
    fn payload_is_a_flat_object() {
        let mut store = MemoryStore::new();
        save_selection(&mut store, "selection", &Selection::new("US", "", "")).unwrap();
        assert_eq!(
            store.get("selection").unwrap(),
            r#"{"country":"US","state":"","city":""}"#
        );
    }

    #[cfg(feature = "fs")]
    #[test]
    fn file_store_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("selection.json");
        let s = Selection::new("DE", "BY", "MUC");

        let mut store = FileStore::new(&path);
        save_selection(&mut store, "selection", &s).unwrap();

        let reopened = FileStore::new(&path);
        assert_eq!(load_saved_selection(&reopened, "selection"), s);

        let mut store = reopened;
        clear_saved_selection(&mut store, "selection").unwrap();
        assert!(load_saved_selection(&store, "selection").is_empty());
    }
}
