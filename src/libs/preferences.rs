//! Saved user preferences.
//!
//! Two strings survive between runs: the interface language and the last
//! mobile number looked up. They are kept in a small JSON map in the
//! application data directory.
//!
//! Storage is best-effort. A missing, unreadable or unwritable file never
//! surfaces as an error: reads yield `None`, writes yield `false`, and the
//! cause is logged.

use super::data_storage::DataStorage;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const PREFERENCES_FILE_NAME: &str = "preferences.json";

pub const LANGUAGE_KEY: &str = "almuraqib-language";
pub const MOBILE_KEY: &str = "almuraqib-mobile";

#[derive(Debug, Clone)]
pub struct Preferences {
    path: Option<PathBuf>,
}

impl Preferences {
    /// Preferences stored in the platform data directory.
    pub fn new() -> Self {
        match DataStorage::new().get_path(PREFERENCES_FILE_NAME) {
            Ok(path) => Self { path: Some(path) },
            Err(e) => {
                tracing::warn!("preferences storage unavailable: {}", e);
                Self { path: None }
            }
        }
    }

    /// Preferences stored in an explicit file.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: Some(path.into()) }
    }

    pub fn is_available(&self) -> bool {
        self.path.is_some()
    }

    fn load(path: &Path) -> BTreeMap<String, String> {
        if !path.exists() {
            return BTreeMap::new();
        }
        match fs::read_to_string(path).map(|s| serde_json::from_str::<BTreeMap<String, String>>(&s)) {
            Ok(Ok(map)) => map,
            Ok(Err(e)) => {
                tracing::warn!("ignoring malformed preferences file: {}", e);
                BTreeMap::new()
            }
            Err(e) => {
                tracing::warn!("failed to read preferences: {}", e);
                BTreeMap::new()
            }
        }
    }

    fn store(path: &Path, map: &BTreeMap<String, String>) -> bool {
        let result = serde_json::to_string_pretty(map).map_err(std::io::Error::other).and_then(|s| fs::write(path, s));
        match result {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("failed to write preferences: {}", e);
                false
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        let path = self.path.as_deref()?;
        Self::load(path).remove(key)
    }

    pub fn set(&self, key: &str, value: &str) -> bool {
        let Some(path) = self.path.as_deref() else {
            return false;
        };
        let mut map = Self::load(path);
        map.insert(key.to_owned(), value.to_owned());
        Self::store(path, &map)
    }

    pub fn remove(&self, key: &str) -> bool {
        let Some(path) = self.path.as_deref() else {
            return false;
        };
        let mut map = Self::load(path);
        map.remove(key);
        Self::store(path, &map)
    }

    pub fn saved_language(&self) -> Option<String> {
        self.get(LANGUAGE_KEY)
    }

    pub fn save_language(&self, language: &str) -> bool {
        self.set(LANGUAGE_KEY, language)
    }

    pub fn saved_mobile(&self) -> Option<String> {
        self.get(MOBILE_KEY)
    }

    pub fn save_mobile(&self, mobile: &str) -> bool {
        self.set(MOBILE_KEY, mobile)
    }

    pub fn clear_all(&self) {
        self.remove(LANGUAGE_KEY);
        self.remove(MOBILE_KEY);
    }
}

impl Default for Preferences {
    fn default() -> Self {
        Self::new()
    }
}
