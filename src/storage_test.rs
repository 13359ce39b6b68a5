use super::*;
use tracker::{AuthContext, Role, Session, User};

fn temp_storage() -> (tempfile::TempDir, FileStorage) {
    let dir = tempfile::tempdir().expect("tempdir");
    let storage = FileStorage::new(dir.path().join("nested").join("session.json"));
    (dir, storage)
}

#[test]
fn missing_file_reads_as_empty() {
    let (_dir, storage) = temp_storage();
    assert_eq!(storage.get("token"), Ok(None));
}

#[test]
fn set_creates_parent_dirs_and_persists() {
    let (_dir, mut storage) = temp_storage();
    storage.set("token", "abc").expect("set");

    let reopened = FileStorage::new(storage.path().expect("path"));
    assert_eq!(reopened.get("token"), Ok(Some("abc".to_owned())));
}

#[test]
fn removing_last_entry_deletes_file() {
    let (_dir, mut storage) = temp_storage();
    storage.set("token", "abc").expect("set");
    storage.remove("token").expect("remove");

    assert!(!storage.path().expect("path").exists());
    assert!(storage.remove("token").is_ok());
}

#[test]
fn corrupt_file_is_a_backend_error_on_read_and_replaced_on_write() {
    let (_dir, mut storage) = temp_storage();
    let path = storage.path().expect("path").to_path_buf();
    fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
    fs::write(&path, "{oops").expect("write");

    assert!(matches!(storage.get("token"), Err(StorageError::Backend(_))));
    storage.set("token", "fresh").expect("set");
    assert_eq!(storage.get("token"), Ok(Some("fresh".to_owned())));
}

#[test]
fn unavailable_storage_reports_unavailable() {
    let mut storage = FileStorage::unavailable();
    assert_eq!(storage.get("token"), Err(StorageError::Unavailable));
    assert_eq!(storage.set("token", "x"), Err(StorageError::Unavailable));
}

#[test]
fn auth_context_round_trips_through_file() {
    let (_dir, storage) = temp_storage();
    let user = User::new("5", "e@example.com", Role::Employee);

    AuthContext::new(storage.clone()).login("tok", user.clone());
    assert_eq!(AuthContext::new(storage.clone()).session(), &Session::new("tok", user));

    AuthContext::new(storage.clone()).logout();
    assert_eq!(AuthContext::new(storage).session(), &Session::empty());
}

#[test]
fn unavailable_storage_degrades_to_signed_out() {
    let ctx = AuthContext::new(FileStorage::unavailable());
    assert!(!ctx.is_authenticated());
}

#[cfg(unix)]
#[test]
fn session_file_is_owner_only_even_with_stale_temp_file() {
    use std::os::unix::fs::PermissionsExt;

    let (_dir, mut storage) = temp_storage();
    let path = storage.path().expect("path").to_owned();
    fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, "{}").expect("stale temp");
    fs::set_permissions(&tmp, fs::Permissions::from_mode(0o644)).expect("chmod");

    storage.set("token", "secret").expect("set");

    let mode = fs::metadata(&path).expect("metadata").permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
    assert!(!tmp.exists());
}
