//! Route guard: a pure decision from (session, route classification).
//!
//! DECISION TABLE
//! ==============
//! Evaluated top to bottom, first match wins:
//!
//! 1. public route                      -> render
//! 2. signed out                        -> redirect to [`LOGIN_PATH`]
//! 3. unrecognized role                 -> access denied (never a redirect)
//! 4. admin-only route, employee        -> redirect to [`EMPLOYEE_DASHBOARD_PATH`]
//! 5. employee-only route, admin        -> redirect to [`ADMIN_DASHBOARD_PATH`]
//! 6. otherwise                         -> render
//!
//! The sign-in check runs before any role rule so a signed-out visitor never
//! learns a role-specific redirect target.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::role::Role;
use crate::session::Session;

pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const EMPLOYEE_DASHBOARD_PATH: &str = "/employee/dashboard";
pub const ADMIN_DASHBOARD_PATH: &str = "/admin";
pub const ROOT_PATH: &str = "/";

/// Who may view a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteAccess {
    Public,
    EmployeeOnly,
    AdminOnly,
}

/// Guard state derived from a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AccessState {
    Unauthenticated,
    Employee,
    Admin,
    /// Signed in with a role the client does not know.
    Unrecognized(String),
}

impl AccessState {
    #[must_use]
    pub fn of(session: &Session) -> Self {
        match session.role() {
            None => Self::Unauthenticated,
            Some(Role::Employee) => Self::Employee,
            Some(Role::Admin) => Self::Admin,
            Some(Role::Unrecognized(raw)) => Self::Unrecognized(raw.clone()),
        }
    }
}

/// Outcome of a guard evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Redirect(&'static str),
    /// Render the access-denied view naming the offending role.
    AccessDenied { role: String },
}

/// Apply the decision table to a classified route.
#[must_use]
pub fn decide(session: &Session, access: RouteAccess) -> GuardDecision {
    if access == RouteAccess::Public {
        return GuardDecision::Render;
    }
    match (AccessState::of(session), access) {
        (AccessState::Unauthenticated, _) => GuardDecision::Redirect(LOGIN_PATH),
        (AccessState::Unrecognized(role), _) => GuardDecision::AccessDenied { role },
        (AccessState::Employee, RouteAccess::AdminOnly) => GuardDecision::Redirect(EMPLOYEE_DASHBOARD_PATH),
        (AccessState::Admin, RouteAccess::EmployeeOnly) => GuardDecision::Redirect(ADMIN_DASHBOARD_PATH),
        _ => GuardDecision::Render,
    }
}

/// Classification of a known path, `None` for the root and unknown paths.
#[must_use]
pub fn classify(path: &str) -> Option<RouteAccess> {
    match normalize_path(path) {
        LOGIN_PATH | REGISTER_PATH => Some(RouteAccess::Public),
        EMPLOYEE_DASHBOARD_PATH => Some(RouteAccess::EmployeeOnly),
        ADMIN_DASHBOARD_PATH => Some(RouteAccess::AdminOnly),
        _ => None,
    }
}

/// Landing page for a session.
///
/// Unrecognized roles land on the employee dashboard, which the guard turns
/// into the access-denied view instead of bouncing again.
#[must_use]
pub fn home_path(session: &Session) -> &'static str {
    match AccessState::of(session) {
        AccessState::Unauthenticated => LOGIN_PATH,
        AccessState::Admin => ADMIN_DASHBOARD_PATH,
        AccessState::Employee | AccessState::Unrecognized(_) => EMPLOYEE_DASHBOARD_PATH,
    }
}

/// Guard a raw path: known routes go through [`decide`], the root and
/// unknown paths redirect to the session's [`home_path`].
#[must_use]
pub fn resolve(path: &str, session: &Session) -> GuardDecision {
    match classify(path) {
        Some(access) => decide(session, access),
        None => match AccessState::of(session) {
            AccessState::Unrecognized(role) => GuardDecision::AccessDenied { role },
            _ => GuardDecision::Redirect(home_path(session)),
        },
    }
}

/// Strip query, fragment and trailing slashes so `/admin/?x=1` matches `/admin`.
fn normalize_path(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { ROOT_PATH } else { trimmed }
}
