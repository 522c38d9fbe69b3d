use enhance_core::{FlagStore, MemoryStore, StoreError};
use web_sys as web;

/// `localStorage` when the browser allows it, memory otherwise.
pub enum BrowserStore {
    Local(web::Storage),
    Memory(MemoryStore),
}

impl BrowserStore {
    pub fn open() -> Self {
        match web::window().map(|w| w.local_storage()) {
            Some(Ok(Some(storage))) => BrowserStore::Local(storage),
            _ => {
                log::warn!("[sidebar] {}; drawer state will not persist", StoreError::Unavailable);
                BrowserStore::Memory(MemoryStore::new())
            }
        }
    }
}

impl FlagStore for BrowserStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        match self {
            BrowserStore::Local(s) => s.get_item(key).map_err(|e| StoreError::Read {
                key: key.to_string(),
                reason: format!("{:?}", e),
            }),
            BrowserStore::Memory(m) => m.load(key),
        }
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        match self {
            BrowserStore::Local(s) => s.set_item(key, value).map_err(|e| StoreError::Write {
                key: key.to_string(),
                reason: format!("{:?}", e),
            }),
            BrowserStore::Memory(m) => m.save(key, value),
        }
    }
}
