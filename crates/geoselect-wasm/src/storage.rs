// crates/geoselect-wasm/src/storage.rs
use crate::fetch::js_text;
use geoselect_core::{GeoError, MemoryStore, Result, SelectionStore};
use web_sys::{Storage, Window};

/// `window.localStorage` when the browser grants it, memory otherwise
/// (private browsing, sandboxed iframes).
#[derive(Debug)]
pub enum BrowserStore {
    Local(Storage),
    Memory(MemoryStore),
}

impl BrowserStore {
    pub fn new(window: &Window) -> Self {
        match window.local_storage() {
            Ok(Some(storage)) => BrowserStore::Local(storage),
            _ => {
                web_sys::console::warn_1(
                    &"localStorage unavailable, selection will not survive a reload".into(),
                );
                BrowserStore::Memory(MemoryStore::new())
            }
        }
    }

    pub fn is_persistent(&self) -> bool {
        matches!(self, BrowserStore::Local(_))
    }
}

impl SelectionStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        match self {
            BrowserStore::Local(s) => s.get_item(key).ok().flatten(),
            BrowserStore::Memory(m) => m.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match self {
            BrowserStore::Local(s) => s
                .set_item(key, value)
                .map_err(|e| GeoError::Storage(js_text(&e))),
            BrowserStore::Memory(m) => m.set(key, value),
        }
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        match self {
            BrowserStore::Local(s) => s
                .remove_item(key)
                .map_err(|e| GeoError::Storage(js_text(&e))),
            BrowserStore::Memory(m) => m.remove(key),
        }
    }
}
