//! Local persistence for the language preference and cookie consent.
//!
//! On the web this is `window.localStorage`. Native builds (tests, tooling)
//! keep the same key/value shape in a JSON file under the platform data dir.

use std::cell::RefCell;
use std::collections::HashMap;

use tracing::warn;

use crate::core::lang::Language;

pub const LANGUAGE_KEY: &str = "preferredLanguage";
pub const COOKIE_PREFERENCES_KEY: &str = "cookiePreferences";

/// String key/value persistence. Reads never fail; a broken backend reads
/// as empty.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        (**self).set(key, value)
    }
}

/// In-memory store; nothing survives a reload.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// The platform's persistent store.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStore;

#[cfg(target_arch = "wasm32")]
impl LocalStore {
    fn backend() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::backend()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        let storage = Self::backend().ok_or("localStorage unavailable")?;
        storage
            .set_item(key, value)
            .map_err(|err| format!("localStorage write failed: {err:?}"))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl LocalStore {
    fn path() -> Result<std::path::PathBuf, String> {
        let dirs = directories::ProjectDirs::from("io", "Vitrina", "vitrina")
            .ok_or("unable to resolve data directory")?;
        Ok(dirs.data_dir().join("local-storage.json"))
    }

    fn read_all() -> HashMap<String, String> {
        Self::path()
            .ok()
            .and_then(|path| std::fs::read_to_string(path).ok())
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::read_all().remove(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        let path = Self::path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|err| err.to_string())?;
        }
        let mut entries = Self::read_all();
        entries.insert(key.to_string(), value.to_string());
        let raw = serde_json::to_string_pretty(&entries).map_err(|err| err.to_string())?;
        std::fs::write(path, raw).map_err(|err| err.to_string())
    }
}

/// Remembers the visitor's language choice.
#[derive(Debug)]
pub struct LanguageStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> LanguageStore<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Stored language, else the browser locale's default, else English.
    pub fn language(&self, requested_locale: Option<&str>) -> Language {
        self.store
            .get(&self.key)
            .and_then(|raw| Language::from_code(&raw))
            .or_else(|| requested_locale.map(Language::from_locale))
            .unwrap_or_default()
    }

    pub fn set_language(&self, lang: Language) -> Result<(), String> {
        self.store.set(&self.key, lang.code())
    }

    /// Persist and log on failure; the caller keeps the in-memory value.
    pub fn remember(&self, lang: Language) {
        if let Err(err) = self.set_language(lang) {
            warn!(%lang, "failed to persist language preference: {err}");
        }
    }
}
