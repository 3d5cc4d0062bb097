use super::*;

// =============================================================
// MemoryStorage
// =============================================================

#[test]
fn memory_storage_roundtrip() {
    let storage = MemoryStorage::new();
    assert!(storage.get("k").is_none());

    storage.set("k", "v");
    assert_eq!(storage.get("k"), Some("v".to_owned()));
    assert!(storage.contains("k"));

    storage.set("k", "v2");
    assert_eq!(storage.get("k"), Some("v2".to_owned()));

    storage.remove("k");
    assert!(storage.get("k").is_none());
    assert!(!storage.contains("k"));
}

#[test]
fn memory_storage_remove_missing_key_is_noop() {
    let storage = MemoryStorage::new();
    storage.remove("missing");
    assert!(storage.get("missing").is_none());
}

// =============================================================
// BrowserStorage (native builds)
// =============================================================

#[test]
fn browser_storage_is_inert_without_a_browser() {
    let storage = BrowserStorage;
    storage.set("k", "v");
    assert!(storage.get("k").is_none());
    storage.remove("k");
}
