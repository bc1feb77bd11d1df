use super::*;

// =============================================================
// MemoryStorage
// =============================================================

#[test]
fn memory_storage_starts_empty() {
    let storage = MemoryStorage::new();
    assert!(storage.is_empty());
    assert_eq!(storage.get("anything"), None);
}

#[test]
fn memory_storage_set_then_get() {
    let storage = MemoryStorage::new();
    storage.set("k", "v").unwrap();
    assert_eq!(storage.get("k").as_deref(), Some("v"));
    assert_eq!(storage.len(), 1);
}

#[test]
fn memory_storage_remove_absent_key_is_ok() {
    let storage = MemoryStorage::new();
    assert!(storage.remove("missing").is_ok());
}

#[test]
fn memory_storage_clones_share_entries() {
    let storage = MemoryStorage::new();
    let other = storage.clone();
    storage.set("k", "v").unwrap();
    assert!(other.contains("k"));
    other.remove("k").unwrap();
    assert!(!storage.contains("k"));
}

#[test]
fn memory_storage_with_entries_seeds_values() {
    let storage = MemoryStorage::with_entries([("a", "1"), ("b", "2")]);
    assert_eq!(storage.get("a").as_deref(), Some("1"));
    assert_eq!(storage.get("b").as_deref(), Some("2"));
}

// =============================================================
// BrowserStorage outside the browser
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_reads_nothing_without_hydrate() {
    assert_eq!(BrowserStorage.get("factcheck_session"), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_writes_report_unavailable_without_hydrate() {
    assert!(matches!(BrowserStorage.set("k", "v"), Err(StorageError::Unavailable)));
    assert!(matches!(BrowserStorage.remove("k"), Err(StorageError::Unavailable)));
}
