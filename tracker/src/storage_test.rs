use super::*;

#[test]
fn memory_storage_set_get_remove() {
    let mut storage = MemoryStorage::new();
    assert_eq!(storage.get("token"), Ok(None));

    storage.set("token", "abc").expect("set");
    assert_eq!(storage.get("token"), Ok(Some("abc".to_owned())));

    storage.remove("token").expect("remove");
    assert_eq!(storage.get("token"), Ok(None));
    assert!(storage.is_empty());
}

#[test]
fn memory_storage_remove_missing_is_ok() {
    let mut storage = MemoryStorage::new();
    assert!(storage.remove("nope").is_ok());
}

#[test]
fn memory_storage_clones_share_entries() {
    let mut tab_a = MemoryStorage::new();
    let tab_b = tab_a.clone();
    tab_a.set("user", "{}").expect("set");
    assert_eq!(tab_b.get("user"), Ok(Some("{}".to_owned())));
    assert_eq!(tab_b.len(), 1);
}

#[test]
fn memory_storage_injected_write_failure() {
    let mut storage = MemoryStorage::new();
    storage.fail_writes_to(Some("token"));
    assert!(matches!(storage.set("token", "x"), Err(StorageError::Backend(_))));
    assert!(storage.set("user", "y").is_ok());

    storage.fail_writes_to(None);
    assert!(storage.set("token", "x").is_ok());
}
