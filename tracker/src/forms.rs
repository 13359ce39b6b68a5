//! Input validation shared by the web forms and the CLI.
//!
//! Each validator trims its inputs and returns either the cleaned request
//! payload or the message the form shows.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use crate::wire::{LoginRequest, NewTask, NewTimeLog, RegisterRequest};

pub const LOGIN_FIELDS_REQUIRED: &str = "Enter both email and password.";
pub const REGISTER_FIELDS_REQUIRED: &str = "Name, email and password are required.";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters.";
pub const LOG_FIELDS_REQUIRED: &str = "All fields are required.";
pub const INVALID_HOURS: &str = "Please enter a valid time spent in hours (e.g., 2.5).";
pub const INVALID_TASK: &str = "Select a task.";
pub const INVALID_USER_ID: &str = "User id may only contain letters, digits, '-' and '_'.";
pub const TASK_FIELDS_REQUIRED: &str = "Enter a task description and pick an employee.";

pub const MIN_PASSWORD_LEN: usize = 6;

/// Validation failure, carrying the message to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct FormError(pub &'static str);

/// # Errors
///
/// [`LOGIN_FIELDS_REQUIRED`] when either field is blank.
pub fn validate_login(email: &str, password: &str) -> Result<LoginRequest, FormError> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(FormError(LOGIN_FIELDS_REQUIRED));
    }
    Ok(LoginRequest { email: email.to_owned(), password: password.to_owned() })
}

/// # Errors
///
/// [`REGISTER_FIELDS_REQUIRED`] for blank fields, [`PASSWORD_TOO_SHORT`]
/// below [`MIN_PASSWORD_LEN`] characters.
pub fn validate_register(name: &str, email: &str, password: &str) -> Result<RegisterRequest, FormError> {
    let (name, email) = (name.trim(), email.trim());
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err(FormError(REGISTER_FIELDS_REQUIRED));
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(FormError(PASSWORD_TOO_SHORT));
    }
    Ok(RegisterRequest { name: name.to_owned(), email: email.to_owned(), password: password.to_owned() })
}

/// # Errors
///
/// [`LOG_FIELDS_REQUIRED`], [`INVALID_TASK`] or [`INVALID_HOURS`].
pub fn validate_time_log(task_id: &str, hours: &str, description: &str) -> Result<NewTimeLog, FormError> {
    let (task_id, hours, description) = (task_id.trim(), hours.trim(), description.trim());
    if task_id.is_empty() || hours.is_empty() || description.is_empty() {
        return Err(FormError(LOG_FIELDS_REQUIRED));
    }
    let task_id = task_id.parse::<i64>().map_err(|_| FormError(INVALID_TASK))?;
    let hours_logged = hours
        .parse::<f64>()
        .ok()
        .filter(|h| h.is_finite() && *h > 0.0)
        .ok_or(FormError(INVALID_HOURS))?;
    Ok(NewTimeLog { task_id, hours_logged, description: description.to_owned() })
}

/// # Errors
///
/// [`TASK_FIELDS_REQUIRED`] when the description or assignee is missing.
pub fn validate_task_assignment(task_name: &str, description: &str, assignee: &str) -> Result<NewTask, FormError> {
    let (description, assignee) = (description.trim(), assignee.trim());
    if description.is_empty() || assignee.is_empty() {
        return Err(FormError(TASK_FIELDS_REQUIRED));
    }
    let task_name = match task_name.trim() {
        "" => summarize(description),
        name => name.to_owned(),
    };
    Ok(NewTask { task_name, description: description.to_owned(), assigned_to: assignee.to_owned() })
}

/// Trimmed user id, safe to place in a URL path segment.
///
/// # Errors
///
/// [`INVALID_USER_ID`] when the id is blank or has anything but ASCII
/// letters, digits, `-` and `_`.
pub fn validate_user_id(raw: &str) -> Result<String, FormError> {
    let id = raw.trim();
    if id.is_empty() || !id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
        return Err(FormError(INVALID_USER_ID));
    }
    Ok(id.to_owned())
}

/// Render logged hours the way the history table shows them.
#[must_use]
pub fn format_hours(hours: f64) -> String {
    if hours.is_finite() { format!("{hours:.1}h") } else { "0.0h".to_owned() }
}

/// First line of a description, capped at 50 characters with an ellipsis.
#[must_use]
pub fn summarize(description: &str) -> String {
    const MAX: usize = 50;
    let line = description.lines().next().unwrap_or_default().trim();
    if line.chars().count() <= MAX {
        line.to_owned()
    } else {
        let cut: String = line.chars().take(MAX).collect();
        format!("{cut}...")
    }
}

/// Calendar date of an ISO-8601 timestamp, or `N/A` when absent.
#[must_use]
pub fn format_date(timestamp: Option<&str>) -> String {
    match timestamp.map(str::trim) {
        None | Some("") => "N/A".to_owned(),
        Some(ts) => ts.get(..10).unwrap_or(ts).to_owned(),
    }
}
