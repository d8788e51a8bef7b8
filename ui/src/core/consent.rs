//! Cookie consent preferences.

use serde::{Deserialize, Serialize};

use crate::core::storage::KeyValueStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CookiePreferences {
    pub analytics: bool,
    pub preference: bool,
    pub marketing: bool,
}

impl CookiePreferences {
    /// Stored preferences; unreadable JSON reads as nothing stored.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> Option<Self> {
        store
            .get(key)
            .and_then(|raw| serde_json::from_str(&raw).ok())
    }

    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &S, key: &str) -> Result<(), String> {
        let raw = serde_json::to_string(self).map_err(|err| err.to_string())?;
        store.set(key, &raw)
    }
}

/// The "preferences saved" banner. Each save restarts the auto-hide timer;
/// only the latest timer may hide it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SavedNotice {
    visible: bool,
    generation: u64,
}

impl SavedNotice {
    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn show(&mut self) -> u64 {
        self.generation += 1;
        self.visible = true;
        self.generation
    }

    pub fn expire(&mut self, token: u64) {
        if token == self.generation {
            self.visible = false;
        }
    }
}
