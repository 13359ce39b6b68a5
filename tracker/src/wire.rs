//! REST wire types for the work-tracker backend.
//!
//! Paths are relative to the configured API base (`/api` in the browser,
//! `http://localhost:3000/api` by default in the CLI).

#[cfg(test)]
#[path = "wire_test.rs"]
mod wire_test;

use serde::{Deserialize, Serialize};

use crate::session::deserialize_id;

pub const LOGIN_ENDPOINT: &str = "/auth/login";
pub const REGISTER_ENDPOINT: &str = "/auth/register";
pub const TASKS_ENDPOINT: &str = "/logs/tasks";
pub const LOGS_ENDPOINT: &str = "/logs";
pub const SUBMIT_LOG_ENDPOINT: &str = "/logs/log";
pub const ADMIN_USERS_ENDPOINT: &str = "/admin/users";
pub const ADMIN_TASKS_ENDPOINT: &str = "/admin/tasks";

/// Account status value of users waiting for an admin.
pub const STATUS_PENDING: &str = "Pending";

#[must_use]
pub fn approve_user_endpoint(user_id: &str) -> String {
    format!("{ADMIN_USERS_ENDPOINT}/{user_id}/approve")
}

/// Join an API base and an endpoint path without doubling slashes.
#[must_use]
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Task an employee can log time against.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub task_id: i64,
    pub task_name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// One row of an employee's log history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimeLog {
    pub log_id: i64,
    #[serde(default)]
    pub task_name: String,
    #[serde(default)]
    pub work_date: Option<String>,
    pub hours_logged: f64,
    #[serde(default)]
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewTimeLog {
    pub task_id: i64,
    pub hours_logged: f64,
    pub description: String,
}

/// Account as listed on the admin dashboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminUser {
    #[serde(deserialize_with = "deserialize_id")]
    pub user_id: String,
    pub email: String,
    pub role: String,
    pub status: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl AdminUser {
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.status.eq_ignore_ascii_case(STATUS_PENDING)
    }

    #[must_use]
    pub fn is_employee(&self) -> bool {
        self.role.trim().eq_ignore_ascii_case("employee")
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    pub task_name: String,
    pub description: String,
    pub assigned_to: String,
}

/// Employees only, for the task assignment picker.
#[must_use]
pub fn assignable_users(users: &[AdminUser]) -> Vec<&AdminUser> {
    users.iter().filter(|u| u.is_employee()).collect()
}
