//! File-backed preference persistence

use cadence_theme::preference::{FileStorage, StorageBackend};
use cadence_theme::{PreferenceStore, ThemePreference, PREFERENCE_KEY};

#[test]
fn preference_survives_store_recreation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");

    let store = PreferenceStore::with_file(&path);
    store.set(ThemePreference::Dark);
    drop(store);

    let reopened = PreferenceStore::with_file(&path);
    assert_eq!(reopened.get(), ThemePreference::Dark);
}

#[test]
fn missing_file_reads_as_system() {
    let dir = tempfile::tempdir().unwrap();
    let store = PreferenceStore::with_file(dir.path().join("never-written.toml"));
    assert_eq!(store.get(), ThemePreference::System);
}

#[test]
fn corrupt_file_reads_as_system_without_panicking() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "theme-preference = [not toml").unwrap();

    let store = PreferenceStore::with_file(&path);
    assert_eq!(store.get(), ThemePreference::System);
}

#[test]
fn write_repairs_corrupt_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "theme-preference = [not toml").unwrap();

    let store = PreferenceStore::with_file(&path);
    store.set(ThemePreference::Dark);

    let reopened = PreferenceStore::with_file(&path);
    assert_eq!(reopened.get(), ThemePreference::Dark);
}

#[test]
fn unknown_stored_value_reads_as_system() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "\"theme-preference\" = \"sepia\"\n").unwrap();

    let store = PreferenceStore::with_file(&path);
    assert_eq!(store.get(), ThemePreference::System);
}

#[test]
fn write_preserves_unrelated_settings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "locale = \"en-GB\"\n").unwrap();

    let storage = FileStorage::new(&path);
    storage.write(PREFERENCE_KEY, "dark").unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let table: toml::Table = text.parse().unwrap();
    assert_eq!(table["locale"].as_str(), Some("en-GB"));
    assert_eq!(table[PREFERENCE_KEY].as_str(), Some("dark"));
}

#[test]
fn write_creates_missing_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config").join("settings.toml");

    let store = PreferenceStore::with_file(&path);
    store.set(ThemePreference::Light);
    assert_eq!(store.get(), ThemePreference::Light);
}
