//! Navigation shell: the link set for the current session.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::guard::{ADMIN_DASHBOARD_PATH, EMPLOYEE_DASHBOARD_PATH, LOGIN_PATH, REGISTER_PATH};
use crate::role::Role;
use crate::session::Session;

/// What a navigation entry does when chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavTarget {
    Path(&'static str),
    Logout,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub target: NavTarget,
}

impl NavLink {
    const fn path(label: &'static str, path: &'static str) -> Self {
        Self { label, target: NavTarget::Path(path) }
    }
}

/// Links for a signed-in state and role.
#[must_use]
pub fn nav_links(is_authenticated: bool, role: Option<&Role>) -> Vec<NavLink> {
    if !is_authenticated {
        return vec![NavLink::path("Login", LOGIN_PATH), NavLink::path("Register", REGISTER_PATH)];
    }
    let is_admin = role.is_some_and(Role::is_admin);
    let dashboard = if is_admin { ADMIN_DASHBOARD_PATH } else { EMPLOYEE_DASHBOARD_PATH };

    let mut links = vec![NavLink::path("Dashboard", dashboard)];
    if is_admin {
        links.push(NavLink::path("Admin", ADMIN_DASHBOARD_PATH));
    }
    links.push(NavLink { label: "Logout", target: NavTarget::Logout });
    links
}

#[must_use]
pub fn nav_links_for(session: &Session) -> Vec<NavLink> {
    nav_links(session.is_authenticated(), session.role())
}
