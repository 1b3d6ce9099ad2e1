//! Persisted voice settings
//!
//! Voice name, rate and pitch survive restarts. They are serialized as
//! one JSON payload under a single namespaced key, so the storage layer
//! stays a plain string-keyed map and never needs to understand the
//! settings themselves.

use crate::Result;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Storage key for the settings payload
pub const SETTINGS_KEY: &str = "lernapp_voice_settings_v1";

/// String-keyed persistent storage
///
/// Anything that maps string keys to string values and survives a
/// restart fits: a file, a browser's localStorage, a test map.
pub trait KeyValueStore: Send {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Settings as they are serialized to storage
///
/// Field names are part of the stored format; missing numeric fields
/// are tolerated on load and mean "keep the current value".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedSettings {
    /// Name of the selected voice, `None` when no voice was selected
    #[serde(default)]
    pub voice_name: Option<String>,

    /// Speech rate multiplier (1.0 = normal)
    #[serde(default)]
    pub rate: Option<f32>,

    /// Speech pitch multiplier (1.0 = normal)
    #[serde(default)]
    pub pitch: Option<f32>,
}

impl PersistedSettings {
    /// Reconcile saved values with the current ones
    ///
    /// Saved numeric values win; absent settings or absent fields keep
    /// the values passed in.
    pub fn apply_defaults(saved: Option<&PersistedSettings>, rate: f32, pitch: f32) -> (f32, f32) {
        match saved {
            Some(s) => (s.rate.unwrap_or(rate), s.pitch.unwrap_or(pitch)),
            None => (rate, pitch),
        }
    }
}

/// Loads and saves [`PersistedSettings`] through a [`KeyValueStore`]
pub struct SettingsStore {
    store: Box<dyn KeyValueStore>,
}

impl SettingsStore {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Read saved settings
    ///
    /// An absent key or an unparsable payload both mean "no saved
    /// settings"; corrupt data is never an error.
    pub fn load(&self) -> Option<PersistedSettings> {
        let raw = self.store.get(SETTINGS_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(settings) => Some(settings),
            Err(e) => {
                warn!("Ignoring unparsable saved settings: {}", e);
                None
            }
        }
    }

    /// Overwrite saved settings with the given values
    pub fn save(&mut self, settings: &PersistedSettings) -> Result<()> {
        let raw = serde_json::to_string(settings)?;
        debug!("Saving settings: {}", raw);
        self.store.set(SETTINGS_KEY, &raw)
    }
}

/// File-backed key-value store
///
/// Keeps all keys in one JSON object on disk, written out on every
/// set. An unreadable or corrupt file degrades to an empty store.
pub struct FileStore {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl FileStore {
    /// Open a store file, reading whatever is already there
    pub fn open(path: PathBuf) -> Self {
        let values = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(values) => values,
                Err(e) => {
                    warn!("Store file {:?} is not valid JSON, starting empty: {}", path, e);
                    HashMap::new()
                }
            },
            Err(_) => {
                debug!("No store file at {:?}", path);
                HashMap::new()
            }
        };

        Self { path, values }
    }

    /// Default store location (~/.lernapp_store.json)
    pub fn default_path() -> PathBuf {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.join(".lernapp_store.json")
    }

    /// Expose the store file path for display
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn write_out(&self) -> Result<()> {
        let raw = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.write_out()
    }
}

/// In-memory key-value store for tests and headless use
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> SettingsStore {
        SettingsStore::new(Box::new(MemoryStore::new()))
    }

    #[test]
    fn test_load_without_saved_settings() {
        assert_eq!(store().load(), None);
    }

    #[test]
    fn test_save_load_round_trip() {
        let mut store = store();
        let settings = PersistedSettings {
            voice_name: Some("Anna".to_string()),
            rate: Some(1.2),
            pitch: Some(0.9),
        };
        store.save(&settings).unwrap();
        assert_eq!(store.load(), Some(settings));
    }

    #[test]
    fn test_round_trip_with_no_voice() {
        let mut store = store();
        let settings = PersistedSettings {
            voice_name: None,
            rate: Some(0.1),
            pitch: Some(2.0),
        };
        store.save(&settings).unwrap();
        // A saved low rate is preserved verbatim; clamping happens at
        // speak time only
        assert_eq!(store.load(), Some(settings));
    }

    #[test]
    fn test_malformed_payload_is_treated_as_absent() {
        let mut inner = MemoryStore::new();
        inner.set(SETTINGS_KEY, "{not json").unwrap();
        let store = SettingsStore::new(Box::new(inner));
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_wrong_shape_is_treated_as_absent() {
        let mut inner = MemoryStore::new();
        inner.set(SETTINGS_KEY, "[1, 2, 3]").unwrap();
        let store = SettingsStore::new(Box::new(inner));
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_missing_fields_are_tolerated() {
        let mut inner = MemoryStore::new();
        inner.set(SETTINGS_KEY, r#"{"rate": 1.5}"#).unwrap();
        let store = SettingsStore::new(Box::new(inner));
        let loaded = store.load().unwrap();
        assert_eq!(loaded.rate, Some(1.5));
        assert_eq!(loaded.pitch, None);
        assert_eq!(loaded.voice_name, None);
    }

    #[test]
    fn test_stored_field_names() {
        // The stored format is part of the contract, not an
        // implementation detail
        let settings = PersistedSettings {
            voice_name: Some("Anna".to_string()),
            rate: Some(1.0),
            pitch: Some(1.0),
        };
        let raw = serde_json::to_string(&settings).unwrap();
        assert!(raw.contains("\"voiceName\""));
        assert!(raw.contains("\"rate\""));
        assert!(raw.contains("\"pitch\""));
    }

    #[test]
    fn test_apply_defaults() {
        let saved = PersistedSettings {
            voice_name: None,
            rate: Some(1.4),
            pitch: None,
        };
        assert_eq!(
            PersistedSettings::apply_defaults(Some(&saved), 1.0, 1.0),
            (1.4, 1.0)
        );
        assert_eq!(PersistedSettings::apply_defaults(None, 1.0, 0.8), (1.0, 0.8));
    }
}
