//! Persistent key-value storage.
//!
//! - Web: `localStorage`
//! - Desktop: one JSON file per key in the platform config directory:
//!   - Linux: `~/.config/fantasta/`
//!   - macOS: `~/Library/Application Support/fantasta/`
//!   - Windows: `%APPDATA%\fantasta\`

use serde::{de::DeserializeOwned, Serialize};

/// Raw string storage backend.
pub trait KeyValueStore {
    fn load_raw(&self, key: &str) -> Option<String>;
    /// Returns `true` if the value was written.
    fn save_raw(&self, key: &str, value: &str) -> bool;
    fn remove(&self, key: &str);
}

/// Serialize `value` as JSON and store it under `key`.
pub fn save<T: Serialize>(store: &impl KeyValueStore, key: &str, value: &T) -> bool {
    match serde_json::to_string(value) {
        Ok(json) => store.save_raw(key, &json),
        Err(e) => {
            crate::log_error!("Failed to serialize '{}': {}", key, e);
            false
        }
    }
}

/// Load and deserialize the value under `key`.
///
/// Returns `None` if the key doesn't exist or the stored JSON no longer
/// matches `T`.
pub fn load<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Option<T> {
    let json = store.load_raw(key)?;
    match serde_json::from_str(&json) {
        Ok(value) => Some(value),
        Err(e) => {
            crate::log_warn!("Discarding unreadable '{}': {}", key, e);
            None
        }
    }
}

/// Storage for the platform the client is running on.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlatformStorage;

// =========================================
// Web (WASM) implementation
// =========================================

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for PlatformStorage {
    fn load_raw(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok()?
    }

    fn save_raw(&self, key: &str, value: &str) -> bool {
        local_storage().is_some_and(|s| s.set_item(key, value).is_ok())
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

// =========================================
// Desktop (native) implementation
// =========================================

#[cfg(not(target_arch = "wasm32"))]
fn file_path(key: &str) -> Option<std::path::PathBuf> {
    let app_dir = dirs::config_dir()?.join("fantasta");
    if !app_dir.exists() {
        std::fs::create_dir_all(&app_dir).ok()?;
    }
    let safe_key = key.replace(['/', '\\', ':', '*', '?', '"', '<', '>', '|'], "_");
    Some(app_dir.join(format!("{safe_key}.json")))
}

#[cfg(not(target_arch = "wasm32"))]
impl KeyValueStore for PlatformStorage {
    fn load_raw(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(file_path(key)?).ok()
    }

    fn save_raw(&self, key: &str, value: &str) -> bool {
        let Some(path) = file_path(key) else {
            return false;
        };
        std::fs::write(path, value).is_ok()
    }

    fn remove(&self, key: &str) {
        if let Some(path) = file_path(key) {
            let _ = std::fs::remove_file(path);
        }
    }
}

/// In-memory store, used by tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: std::cell::RefCell<std::collections::HashMap<String, String>>,
}

#[cfg(test)]
impl KeyValueStore for MemoryStorage {
    fn load_raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn save_raw(&self, key: &str, value: &str) -> bool {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        true
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}
