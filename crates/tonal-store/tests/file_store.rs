//! JSON file store behavior against a real filesystem.

use tempfile::tempdir;
use tonal_model::PaletteParams;
use tonal_store::{JsonFileStore, PaletteStore, SavedPalette, StoreError, StoreLimits};

fn record(id: &str) -> SavedPalette {
    let mut record = SavedPalette::new(PaletteParams::default());
    record.id = id.to_string();
    record
}

#[test]
fn missing_file_reads_as_empty() {
    let dir = tempdir().expect("tempdir");
    let store = JsonFileStore::new(dir.path().join("palettes.json"), StoreLimits::pro());
    assert!(store.list().expect("list").is_empty());
}

#[test]
fn save_and_load_round_trip() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("palettes.json");
    let mut store = JsonFileStore::new(&path, StoreLimits::pro());

    let saved = record("alpha");
    store.save(saved.clone()).expect("save");

    // A fresh store instance reads the same records back.
    let reopened = JsonFileStore::new(&path, StoreLimits::pro());
    let loaded = reopened.load("alpha").expect("load").expect("record exists");
    assert_eq!(loaded, saved);
}

#[test]
fn newest_record_lists_first() {
    let dir = tempdir().expect("tempdir");
    let mut store = JsonFileStore::new(dir.path().join("palettes.json"), StoreLimits::pro());
    store.save(record("old")).expect("save old");
    store.save(record("new")).expect("save new");

    let listed = store.list().expect("list");
    assert_eq!(listed[0].id, "new");
    assert_eq!(listed[1].id, "old");
}

#[test]
fn free_tier_cap_applies_across_reopens() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("palettes.json");

    let mut store = JsonFileStore::new(&path, StoreLimits::free());
    store.save(record("one")).expect("first");
    store.save(record("two")).expect("second");

    let mut reopened = JsonFileStore::new(&path, StoreLimits::free());
    let third = reopened.save(record("three"));
    assert!(matches!(third, Err(StoreError::LimitReached(2))));
}

#[test]
fn delete_removes_only_the_target() {
    let dir = tempdir().expect("tempdir");
    let mut store = JsonFileStore::new(dir.path().join("palettes.json"), StoreLimits::pro());
    store.save(record("keep")).expect("save keep");
    store.save(record("drop")).expect("save drop");

    assert!(store.delete("drop").expect("delete"));
    let listed = store.list().expect("list");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, "keep");
    assert!(!store.delete("drop").expect("second delete is a no-op"));
}

#[test]
fn saved_records_serialize_parameters_flat() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("palettes.json");
    let mut store = JsonFileStore::new(&path, StoreLimits::pro());
    store.save(record("flat")).expect("save");

    let raw = std::fs::read_to_string(&path).expect("read file");
    // Parameters flatten into the record, mirroring the studio's JSON.
    assert!(raw.contains("\"energy\""));
    assert!(raw.contains("\"hueBase\""));
    assert!(raw.contains("\"createdAt\""));
}
