use super::*;
use crate::session::User;

fn labels(links: &[NavLink]) -> Vec<&'static str> {
    links.iter().map(|l| l.label).collect()
}

#[test]
fn signed_out_shows_login_and_register() {
    let links = nav_links_for(&Session::empty());
    assert_eq!(labels(&links), ["Login", "Register"]);
    assert_eq!(links[0].target, NavTarget::Path("/login"));
    assert_eq!(links[1].target, NavTarget::Path("/register"));
}

#[test]
fn employee_gets_dashboard_and_logout() {
    let links = nav_links(true, Some(&Role::Employee));
    assert_eq!(labels(&links), ["Dashboard", "Logout"]);
    assert_eq!(links[0].target, NavTarget::Path("/employee/dashboard"));
    assert_eq!(links[1].target, NavTarget::Logout);
}

#[test]
fn admin_gets_admin_link() {
    let session = Session::new("t", User::new("1", "a@example.com", Role::parse("admin")));
    let links = nav_links_for(&session);
    assert_eq!(labels(&links), ["Dashboard", "Admin", "Logout"]);
    assert_eq!(links[0].target, NavTarget::Path("/admin"));
    assert_eq!(links[1].target, NavTarget::Path("/admin"));
}

#[test]
fn unknown_role_is_treated_as_non_admin() {
    let links = nav_links(true, Some(&Role::parse("Manager")));
    assert_eq!(labels(&links), ["Dashboard", "Logout"]);
}
