#![cfg(not(feature = "csr"))]

use super::*;
use tracker::{Role, User};

fn credentials(role: Role) -> Credentials {
    Credentials { token: "tok".to_owned(), user: User::new("7", "e@example.com", role) }
}

#[test]
fn starts_signed_out_without_browser_storage() {
    let auth = AuthHandle::new();
    assert!(!auth.session_untracked().is_authenticated());
    assert_eq!(auth.token(), None);
}

#[test]
fn login_is_mirrored_into_signal_even_if_storage_is_missing() {
    let auth = AuthHandle::new();
    let ticket = auth.begin_login().expect("ticket");

    assert_eq!(auth.complete_login(ticket, credentials(Role::Employee)), Ok("/employee/dashboard"));
    assert_eq!(auth.token().as_deref(), Some("tok"));
    assert_eq!(auth.session_untracked().role(), Some(&Role::Employee));
}

#[test]
fn admin_lands_on_admin_dashboard() {
    let auth = AuthHandle::new();
    let ticket = auth.begin_login().expect("ticket");
    assert_eq!(auth.complete_login(ticket, credentials(Role::Admin)), Ok("/admin"));
}

#[test]
fn logout_during_login_drops_the_answer() {
    let auth = AuthHandle::new();
    let ticket = auth.begin_login().expect("ticket");
    auth.logout();

    assert_eq!(auth.complete_login(ticket, credentials(Role::Admin)), Err(StaleLogin));
    assert!(!auth.session_untracked().is_authenticated());
}

#[test]
fn reload_without_storage_signs_out() {
    let auth = AuthHandle::new();
    let ticket = auth.begin_login().expect("ticket");
    auth.complete_login(ticket, credentials(Role::Employee)).expect("login");

    // Nothing was persisted, so storage disagrees with memory.
    assert!(auth.reload());
    assert!(!auth.session_untracked().is_authenticated());
    assert!(!auth.reload());
}

#[test]
fn newer_login_attempt_supersedes_older_one() {
    let auth = AuthHandle::new();
    let first = auth.begin_login().expect("ticket");
    let second = auth.begin_login().expect("ticket");

    assert_eq!(auth.complete_login(first, credentials(Role::Admin)), Err(StaleLogin));
    assert!(!auth.session_untracked().is_authenticated());
    assert_eq!(auth.complete_login(second, credentials(Role::Employee)), Ok("/employee/dashboard"));
}
