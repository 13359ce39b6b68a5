//! Account roles as a closed enumeration.
//!
//! The backend's casing is not reliable across deployments, so raw role
//! strings are normalized exactly once, when a session is committed or
//! loaded. Everything downstream matches on [`Role`].

#[cfg(test)]
#[path = "role_test.rs"]
mod role_test;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Role carried by an authenticated user.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Employee,
    Admin,
    /// A role string the client does not know. Kept verbatim for display.
    Unrecognized(String),
}

impl Role {
    /// Normalize a wire role string. Matching ignores case and surrounding
    /// whitespace.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("admin") {
            Self::Admin
        } else if trimmed.eq_ignore_ascii_case("employee") {
            Self::Employee
        } else {
            Self::Unrecognized(trimmed.to_owned())
        }
    }

    /// Canonical wire spelling.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Employee => "Employee",
            Self::Admin => "Admin",
            Self::Unrecognized(raw) => raw,
        }
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}
