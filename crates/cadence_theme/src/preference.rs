//! Persisted theme preference
//!
//! The user's choice is a single persisted key, `theme-preference`, holding
//! one of the literal strings `"light"`, `"dark"` or `"system"`. Storage is
//! strictly best-effort: a backend that cannot read or write degrades to the
//! `system` default with a warning, and never surfaces an error to the
//! caller. Write failures do not roll back the in-memory mode change.

use crate::system::SystemSignal;
use crate::theme::ColorScheme;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::sync::Mutex;
use thiserror::Error;

/// Storage key for the persisted preference.
pub const PREFERENCE_KEY: &str = "theme-preference";

/// The user-facing theme choice. `System` defers to the OS signal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemePreference {
    /// Stable id for the persisted value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    /// Parse a persisted value. Anything unrecognized is `None`; callers
    /// treat that as absent.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            "system" => Some(Self::System),
            _ => None,
        }
    }

    pub fn is_system(self) -> bool {
        matches!(self, Self::System)
    }
}

impl Display for ThemePreference {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Combine a stored preference with the current system signal into the
/// effective scheme.
///
/// Pure and total: `System` follows the signal, an explicit choice wins
/// regardless of the signal. Same inputs always produce the same output.
pub fn resolve(pref: ThemePreference, signal: SystemSignal) -> ColorScheme {
    match pref {
        ThemePreference::Light => ColorScheme::Light,
        ThemePreference::Dark => ColorScheme::Dark,
        ThemePreference::System => signal.color_scheme,
    }
}

/// Storage failures. All of these are recovered locally by
/// [`PreferenceStore`]; they exist so backends can say what went wrong.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("storage read failed: {0}")]
    Read(String),

    #[error("storage write failed: {0}")]
    Write(String),

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Key/value persistence seam. One implementation per host environment.
pub trait StorageBackend: Send + Sync {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// TOML-file-backed storage: a single flat table keyed by setting name.
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load_table(&self) -> Result<toml::Table, StorageError> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(toml::Table::new())
            }
            Err(err) => return Err(StorageError::Read(err.to_string())),
        };
        text.parse::<toml::Table>()
            .map_err(|err| StorageError::Read(err.to_string()))
    }
}

impl StorageBackend for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let table = self.load_table()?;
        Ok(table
            .get(key)
            .and_then(|value| value.as_str())
            .map(str::to_owned))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        // An unreadable or corrupt file must not block writes forever;
        // start over from an empty table and let this write repair it.
        let mut table = self.load_table().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "settings file unreadable, rewriting from scratch");
            toml::Table::new()
        });
        table.insert(key.to_owned(), toml::Value::String(value.to_owned()));
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|err| StorageError::Write(err.to_string()))?;
        }
        let text =
            toml::to_string(&table).map_err(|err| StorageError::Write(err.to_string()))?;
        std::fs::write(&self.path, text).map_err(|err| StorageError::Write(err.to_string()))
    }
}

/// In-memory storage, used in tests and headless runs.
#[derive(Default)]
pub struct MemoryStorage {
    values: Mutex<FxHashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.lock().unwrap().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Read/write access to the persisted theme preference.
pub struct PreferenceStore {
    backend: Box<dyn StorageBackend>,
}

impl PreferenceStore {
    pub fn new(backend: Box<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// File-backed store at the given path.
    pub fn with_file(path: impl Into<PathBuf>) -> Self {
        Self::new(Box::new(FileStorage::new(path)))
    }

    /// In-memory store.
    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryStorage::new()))
    }

    /// The stored preference, or `System` when the key is absent, holds an
    /// unrecognized value, or the backend fails. Never panics or propagates.
    pub fn get(&self) -> ThemePreference {
        match self.backend.read(PREFERENCE_KEY) {
            Ok(Some(value)) => ThemePreference::parse(&value).unwrap_or_else(|| {
                tracing::warn!(%value, "unrecognized stored theme preference, using system");
                ThemePreference::System
            }),
            Ok(None) => ThemePreference::System,
            Err(err) => {
                tracing::warn!(error = %err, "theme preference read failed, using system");
                ThemePreference::System
            }
        }
    }

    /// Persist the preference, best-effort. A failed write is logged and
    /// otherwise ignored; in-memory state has already moved on.
    pub fn set(&self, pref: ThemePreference) {
        if let Err(err) = self.backend.write(PREFERENCE_KEY, pref.as_str()) {
            tracing::warn!(error = %err, preference = %pref, "theme preference write failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingStorage;

    impl StorageBackend for FailingStorage {
        fn read(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable("quota exceeded".into()))
        }

        fn write(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("quota exceeded".into()))
        }
    }

    #[test]
    fn get_defaults_to_system_when_absent() {
        let store = PreferenceStore::in_memory();
        assert_eq!(store.get(), ThemePreference::System);
    }

    #[test]
    fn set_then_get_round_trips() {
        let store = PreferenceStore::in_memory();
        store.set(ThemePreference::Dark);
        assert_eq!(store.get(), ThemePreference::Dark);
    }

    #[test]
    fn unrecognized_value_treated_as_absent() {
        let backend = MemoryStorage::new();
        backend.write(PREFERENCE_KEY, "solarized").unwrap();
        let store = PreferenceStore::new(Box::new(backend));
        assert_eq!(store.get(), ThemePreference::System);
    }

    #[test]
    fn failing_backend_never_panics() {
        let store = PreferenceStore::new(Box::new(FailingStorage));
        assert_eq!(store.get(), ThemePreference::System);
        store.set(ThemePreference::Light);
        assert_eq!(store.get(), ThemePreference::System);
    }

    #[test]
    fn resolve_follows_signal_only_for_system() {
        let light_signal = SystemSignal {
            color_scheme: ColorScheme::Light,
            reduced_motion: false,
        };
        let dark_signal = SystemSignal {
            color_scheme: ColorScheme::Dark,
            reduced_motion: false,
        };

        assert_eq!(
            resolve(ThemePreference::System, dark_signal),
            ColorScheme::Dark
        );
        assert_eq!(
            resolve(ThemePreference::System, light_signal),
            ColorScheme::Light
        );
        // Explicit choice overrides the signal.
        assert_eq!(
            resolve(ThemePreference::Light, dark_signal),
            ColorScheme::Light
        );
        assert_eq!(
            resolve(ThemePreference::Dark, light_signal),
            ColorScheme::Dark
        );
    }

    #[test]
    fn resolve_is_deterministic() {
        let signal = SystemSignal {
            color_scheme: ColorScheme::Dark,
            reduced_motion: true,
        };
        for pref in [
            ThemePreference::Light,
            ThemePreference::Dark,
            ThemePreference::System,
        ] {
            assert_eq!(resolve(pref, signal), resolve(pref, signal));
        }
    }
}
