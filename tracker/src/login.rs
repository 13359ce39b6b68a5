//! Interpretation of the backend's login response.
//!
//! The transport (browser fetch, reqwest) hands over the status code and the
//! raw body; this module decides whether that is a usable session. Nothing
//! here touches session state: callers commit only on `Ok`.
//!
//! Two success shapes are accepted:
//!
//! ```text
//! {"token": "...", "user": {"id": 1, "email": "...", "role": "Admin"}}
//! {"token": "...", "user_id": 1, "email": "...", "role": "Admin"}
//! ```

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use serde::Deserialize;
use serde_json::Value;

use crate::role::Role;
use crate::session::{Credentials, User};

/// Shown when the server rejects credentials without saying why.
pub const DEFAULT_REJECTION_MESSAGE: &str = "Failed to login. Check credentials or approval status.";
/// Shown for network failures.
pub const TRANSPORT_MESSAGE: &str = "Could not reach the server. Please try again.";

/// Why a login attempt produced no session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    /// Bad password, unapproved account, or any other 4xx/5xx answer.
    #[error("{0}")]
    Rejected(String),
    /// The request never produced a response.
    #[error("network error: {0}")]
    Transport(String),
    /// 2xx answer without a usable token or user.
    #[error("malformed login response: {0}")]
    Malformed(&'static str),
}

impl LoginError {
    /// Text for the login form.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected(message) => message.clone(),
            Self::Transport(_) => TRANSPORT_MESSAGE.to_owned(),
            Self::Malformed(_) => DEFAULT_REJECTION_MESSAGE.to_owned(),
        }
    }

    /// Network failures are worth retrying by hand; rejections are not.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

#[derive(Deserialize)]
struct LoginBody {
    token: Option<String>,
    user: Option<Value>,
    user_id: Option<Value>,
    email: Option<String>,
    role: Option<String>,
}

/// Turn an HTTP status and body into credentials.
///
/// # Errors
///
/// [`LoginError::Rejected`] for non-2xx statuses (message taken from the
/// body's `message` or `error` field), [`LoginError::Malformed`] for 2xx
/// bodies missing a token or user.
pub fn interpret_login_response(status: u16, body: &str) -> Result<Credentials, LoginError> {
    if !(200..300).contains(&status) {
        return Err(LoginError::Rejected(
            error_message(body).unwrap_or_else(|| DEFAULT_REJECTION_MESSAGE.to_owned()),
        ));
    }

    let parsed: LoginBody = serde_json::from_str(body).map_err(|_| LoginError::Malformed("body is not a JSON object"))?;
    let token = parsed
        .token
        .filter(|t| !t.trim().is_empty())
        .ok_or(LoginError::Malformed("missing token"))?;

    let user = match parsed.user {
        Some(nested) => serde_json::from_value::<User>(nested).map_err(|_| LoginError::Malformed("invalid user record"))?,
        None => flat_user(parsed.user_id, parsed.email, parsed.role)?,
    };

    Ok(Credentials { token, user })
}

/// Pull a human-readable message out of an error body.
#[must_use]
pub fn error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    ["message", "error"]
        .iter()
        .find_map(|key| value.get(key).and_then(Value::as_str))
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_owned)
}

fn flat_user(id: Option<Value>, email: Option<String>, role: Option<String>) -> Result<User, LoginError> {
    let id = match id.ok_or(LoginError::Malformed("missing user"))? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => return Err(LoginError::Malformed("invalid user id")),
    };
    let email = email.ok_or(LoginError::Malformed("missing email"))?;
    let role = role.ok_or(LoginError::Malformed("missing role"))?;
    Ok(User { id, email, role: Role::parse(&role) })
}
