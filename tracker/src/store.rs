//! Durable session persistence.
//!
//! Layout: two independent string entries, [`TOKEN_KEY`] holding the raw
//! token and [`USER_KEY`] holding the JSON user record. They are written and
//! removed as a pair. Storage failures never escape: a broken or missing
//! medium reads as the signed-out session.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use crate::session::{Session, User};
use crate::storage::{Storage, StorageError};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// Reads and writes the persisted session through a [`Storage`] backend.
#[derive(Debug)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: Storage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Restore the persisted session. Never fails.
    ///
    /// A token without a readable user (or the reverse) is treated as no
    /// session at all, and the leftover entry is scrubbed.
    pub fn load(&mut self) -> Session {
        let token = match self.storage.get(TOKEN_KEY) {
            Ok(token) => token.filter(|t| !t.trim().is_empty()),
            Err(e) => {
                tracing::warn!(error = %e, "session storage unreadable, starting signed out");
                return Session::empty();
            }
        };
        let user = match self.storage.get(USER_KEY) {
            Ok(raw) => raw.and_then(|raw| parse_user(&raw)),
            Err(e) => {
                tracing::warn!(error = %e, "session storage unreadable, starting signed out");
                return Session::empty();
            }
        };

        match (token, user) {
            (Some(token), Some(user)) => Session::new(token, user),
            (None, None) => {
                if self.has_leftovers() {
                    self.scrub();
                }
                Session::empty()
            }
            _ => {
                tracing::warn!("persisted session is incomplete, discarding it");
                self.scrub();
                Session::empty()
            }
        }
    }

    /// Persist `token` and `user` together and return the new session.
    ///
    /// The returned session is always the committed one. If the medium
    /// rejects either write, both entries are removed so a later
    /// [`load`](Self::load) sees no session rather than half of one.
    ///
    /// A blank token is not a credential: it commits as the empty session,
    /// the same thing [`load`](Self::load) would make of it.
    pub fn commit(&mut self, token: &str, user: User) -> Session {
        if token.trim().is_empty() {
            tracing::warn!("refusing to commit a blank token, clearing session");
            return self.clear();
        }
        if let Err(e) = self.write_pair(token, &user) {
            tracing::warn!(error = %e, "failed to persist session, it will not survive a reload");
            self.scrub();
        }
        Session::new(token, user)
    }

    /// Remove the persisted session and return the empty session.
    pub fn clear(&mut self) -> Session {
        self.scrub();
        Session::empty()
    }

    fn write_pair(&mut self, token: &str, user: &User) -> Result<(), StorageError> {
        let user_json = serde_json::to_string(user).map_err(|e| StorageError::Backend(e.to_string()))?;
        self.storage.set(USER_KEY, &user_json)?;
        self.storage.set(TOKEN_KEY, token)
    }

    fn has_leftovers(&self) -> bool {
        matches!(self.storage.get(TOKEN_KEY), Ok(Some(_))) || matches!(self.storage.get(USER_KEY), Ok(Some(_)))
    }

    fn scrub(&mut self) {
        for key in [TOKEN_KEY, USER_KEY] {
            if let Err(e) = self.storage.remove(key) {
                tracing::warn!(error = %e, key, "failed to remove session entry");
            }
        }
    }
}

fn parse_user(raw: &str) -> Option<User> {
    match serde_json::from_str::<User>(raw) {
        Ok(user) => Some(user),
        Err(e) => {
            tracing::warn!(error = %e, "persisted user record is corrupt");
            None
        }
    }
}
