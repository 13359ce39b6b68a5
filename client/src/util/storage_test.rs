#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn browser_storage_is_unavailable_outside_the_browser() {
    let mut storage = BrowserStorage;
    assert_eq!(storage.get(TOKEN_KEY), Err(StorageError::Unavailable));
    assert_eq!(storage.set(TOKEN_KEY, "t"), Err(StorageError::Unavailable));
    assert_eq!(storage.remove(USER_KEY), Err(StorageError::Unavailable));
}

#[test]
fn only_session_keys_trigger_resync() {
    assert!(affects_session(Some("token")));
    assert!(affects_session(Some("user")));
    assert!(affects_session(None));
    assert!(!affects_session(Some("theme")));
}
