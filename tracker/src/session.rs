//! The session record and its invariant.
//!
//! A [`Session`] is either empty or holds [`Credentials`], which own the
//! token and the user together. There is no way to build a session with a
//! token but no user (or the reverse), so derived flags can never be
//! computed from half a session.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Deserializer, Serialize};

use crate::role::Role;

/// Profile of the signed-in account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Backend user id. Accepted as a JSON string or number.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub email: String,
    pub role: Role,
}

impl User {
    #[must_use]
    pub fn new(id: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self { id: id.into(), email: email.into(), role }
    }
}

/// Token and user, always stored and cleared together.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub token: String,
    pub user: User,
}

/// Current authenticated identity, or none.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session(Option<Credentials>);

impl Session {
    /// The signed-out session.
    #[must_use]
    pub fn empty() -> Self {
        Self(None)
    }

    #[must_use]
    pub fn new(token: impl Into<String>, user: User) -> Self {
        Self(Some(Credentials { token: token.into(), user }))
    }

    #[must_use]
    pub fn credentials(&self) -> Option<&Credentials> {
        self.0.as_ref()
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.0.as_ref().map(|c| c.token.as_str())
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.0.as_ref().map(|c| &c.user)
    }

    #[must_use]
    pub fn role(&self) -> Option<&Role> {
        self.user().map(|u| &u.role)
    }

    /// True exactly when a token is present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// True when the user's normalized role is `Admin`.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role().is_some_and(Role::is_admin)
    }

    /// `Authorization` header value for authenticated API calls.
    #[must_use]
    pub fn bearer(&self) -> Option<String> {
        self.token().map(|t| format!("Bearer {t}"))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

pub(crate) fn deserialize_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}
