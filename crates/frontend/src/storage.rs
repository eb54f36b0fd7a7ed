//! Web Storage adapter

use hotel_console_core::{Error, KeyValueStore, MemoryStore, Result};
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys::Storage;

/// `localStorage` or `sessionStorage` behind the core storage contract
#[derive(Clone)]
pub struct BrowserStorage {
    inner: Storage,
}

impl BrowserStorage {
    pub const fn new(inner: Storage) -> Self {
        Self { inner }
    }
}

fn js_error(context: &str, err: &JsValue) -> Error {
    Error::storage(format!("{context}: {err:?}"))
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.inner
            .get_item(key)
            .map_err(|e| js_error("getItem failed", &e))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.inner
            .set_item(key, value)
            .map_err(|e| js_error("setItem failed", &e))
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.inner
            .remove_item(key)
            .map_err(|e| js_error("removeItem failed", &e))
    }

    fn clear(&self) -> Result<()> {
        self.inner.clear().map_err(|e| js_error("clear failed", &e))
    }
}

/// Get localStorage, if the browser exposes it
pub fn local_storage() -> Option<BrowserStorage> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .map(BrowserStorage::new)
}

/// Get sessionStorage, if the browser exposes it
pub fn session_storage() -> Option<BrowserStorage> {
    web_sys::window()
        .and_then(|w| w.session_storage().ok().flatten())
        .map(BrowserStorage::new)
}

/// Browser storage, or an in-memory stand-in when storage is disabled
pub fn or_memory(storage: Option<BrowserStorage>) -> Rc<dyn KeyValueStore> {
    match storage {
        Some(storage) => Rc::new(storage),
        None => {
            tracing::warn!("Browser storage unavailable, keeping state in memory");
            Rc::new(MemoryStore::new())
        }
    }
}
