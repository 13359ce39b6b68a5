use super::*;
use crate::role::Role;
use crate::storage::MemoryStorage;

fn admin() -> User {
    User::new("1", "boss@example.com", Role::Admin)
}

fn store_with(storage: &MemoryStorage) -> SessionStore<MemoryStorage> {
    SessionStore::new(storage.clone())
}

// =============================================================
// Round trips
// =============================================================

#[test]
fn load_from_empty_storage_is_empty_session() {
    let mut store = SessionStore::new(MemoryStorage::new());
    assert_eq!(store.load(), Session::empty());
}

#[test]
fn commit_then_load_restores_session() {
    let storage = MemoryStorage::new();
    let committed = store_with(&storage).commit("tok-1", admin());

    let loaded = store_with(&storage).load();
    assert_eq!(loaded, committed);
    assert_eq!(loaded, Session::new("tok-1", admin()));
}

#[test]
fn clear_then_load_is_empty() {
    let storage = MemoryStorage::new();
    let mut store = store_with(&storage);
    store.commit("tok-1", admin());

    assert_eq!(store.clear(), Session::empty());
    assert_eq!(store_with(&storage).load(), Session::empty());
    assert!(storage.is_empty());
}

#[test]
fn persisted_layout_is_two_string_entries() {
    let storage = MemoryStorage::new();
    store_with(&storage).commit("tok-1", admin());

    assert_eq!(storage.get(TOKEN_KEY), Ok(Some("tok-1".to_owned())));
    let user: serde_json::Value =
        serde_json::from_str(&storage.get(USER_KEY).expect("get").expect("user entry")).expect("json");
    assert_eq!(user, serde_json::json!({"id":"1","email":"boss@example.com","role":"Admin"}));
}

// =============================================================
// Degraded storage
// =============================================================

#[test]
fn token_without_user_is_discarded_and_scrubbed() {
    let mut storage = MemoryStorage::new();
    storage.set(TOKEN_KEY, "orphan").expect("set");

    assert_eq!(store_with(&storage).load(), Session::empty());
    assert!(storage.is_empty());
}

#[test]
fn user_without_token_is_discarded_and_scrubbed() {
    let mut storage = MemoryStorage::new();
    storage
        .set(USER_KEY, r#"{"id":"1","email":"a@b.c","role":"Admin"}"#)
        .expect("set");

    assert_eq!(store_with(&storage).load(), Session::empty());
    assert!(storage.is_empty());
}

#[test]
fn corrupt_user_record_yields_empty_session() {
    let mut storage = MemoryStorage::new();
    storage.set(TOKEN_KEY, "tok").expect("set");
    storage.set(USER_KEY, "{not json").expect("set");

    assert_eq!(store_with(&storage).load(), Session::empty());
    assert!(storage.is_empty());
}

#[test]
fn blank_token_counts_as_absent() {
    let mut storage = MemoryStorage::new();
    storage.set(TOKEN_KEY, "   ").expect("set");
    storage
        .set(USER_KEY, r#"{"id":"1","email":"a@b.c","role":"Admin"}"#)
        .expect("set");

    assert_eq!(store_with(&storage).load(), Session::empty());
}

#[test]
fn load_normalizes_role_casing() {
    let mut storage = MemoryStorage::new();
    storage.set(TOKEN_KEY, "tok").expect("set");
    storage
        .set(USER_KEY, r#"{"id":5,"email":"a@b.c","role":"admin"}"#)
        .expect("set");

    let session = store_with(&storage).load();
    assert!(session.is_admin());
    assert_eq!(session.user().map(|u| u.id.as_str()), Some("5"));
}

#[test]
fn failed_token_write_leaves_no_half_session() {
    let storage = MemoryStorage::new();
    storage.fail_writes_to(Some(TOKEN_KEY));

    let session = store_with(&storage).commit("tok", admin());
    assert!(session.is_authenticated(), "in-memory session still committed");

    assert!(storage.is_empty());
    storage.fail_writes_to(None);
    assert_eq!(store_with(&storage).load(), Session::empty());
}

#[test]
fn failed_user_write_keeps_previous_pair_out() {
    let storage = MemoryStorage::new();
    store_with(&storage).commit("old", admin());
    storage.fail_writes_to(Some(USER_KEY));

    store_with(&storage).commit("new", User::new("2", "e@example.com", Role::Employee));
    storage.fail_writes_to(None);
    assert_eq!(store_with(&storage).load(), Session::empty());
}

#[test]
fn blank_token_commits_as_signed_out() {
    let storage = MemoryStorage::new();
    store_with(&storage).commit("tok", admin());

    let session = store_with(&storage).commit("   ", admin());
    assert_eq!(session, Session::empty());
    assert!(storage.is_empty());
    assert_eq!(store_with(&storage).load(), session);
}
