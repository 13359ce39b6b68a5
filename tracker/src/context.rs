//! Observable auth context.
//!
//! SYSTEM CONTEXT
//! ==============
//! One [`AuthContext`] is constructed per tab (or CLI run) and handed to the
//! parts of the UI that need it. It is the only writer of the session: the
//! route guard and navigation shell re-derive from it through observers.
//!
//! STALENESS
//! =========
//! Every mutation bumps a generation counter, and every login request gets
//! a sequence number. A login request takes a [`LoginTicket`] before going
//! to the network; [`AuthContext::complete_login`] refuses the ticket if the
//! session changed in the meantime or a newer request was started, so a slow
//! response can neither resurrect a session the user already logged out of
//! nor overwrite the answer to a later attempt.

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

use crate::session::{Session, User};
use crate::storage::Storage;
use crate::store::SessionStore;

/// Handle returned by [`AuthContext::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Generation and request number taken when a login request starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub struct LoginTicket {
    generation: u64,
    request: u64,
}

/// A login response arrived after the session had already moved on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("login response superseded by a later session change")]
pub struct StaleLogin;

type Observer = Box<dyn Fn(&Session)>;

/// Single source of truth for the session visible to the UI.
pub struct AuthContext<S> {
    store: SessionStore<S>,
    session: Session,
    generation: u64,
    latest_request: u64,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl<S: Storage> AuthContext<S> {
    /// Build the context and restore the persisted session.
    pub fn new(storage: S) -> Self {
        let mut store = SessionStore::new(storage);
        let session = store.load();
        tracing::debug!(authenticated = session.is_authenticated(), "auth context restored");
        Self { store, session, generation: 0, latest_request: 0, observers: Vec::new(), next_subscription: 0 }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.session.is_admin()
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Replace the session with `token` and `user` and notify observers.
    /// A blank token signs out instead.
    pub fn login(&mut self, token: &str, user: User) {
        let session = self.store.commit(token, user);
        if let Some(role) = session.role() {
            tracing::info!(%role, "signed in");
        }
        self.replace(session);
    }

    /// Clear the session and notify observers. Safe when already signed out.
    pub fn logout(&mut self) {
        let session = self.store.clear();
        if self.session.is_authenticated() {
            tracing::info!("signed out");
        }
        self.replace(session);
    }

    /// Start a login request. The ticket is valid until the next mutation
    /// or the next call to `begin_login`, whichever comes first.
    pub fn begin_login(&mut self) -> LoginTicket {
        self.latest_request += 1;
        LoginTicket { generation: self.generation, request: self.latest_request }
    }

    /// Commit a login response if nothing changed since `ticket` was taken.
    ///
    /// # Errors
    ///
    /// Returns [`StaleLogin`] when a login, logout or reload happened after
    /// the ticket was issued, or when a newer login request was started.
    /// The session is left untouched.
    pub fn complete_login(&mut self, ticket: LoginTicket, token: &str, user: User) -> Result<&Session, StaleLogin> {
        if ticket.request != self.latest_request {
            tracing::debug!(request = ticket.request, latest = self.latest_request, "dropping superseded login");
            return Err(StaleLogin);
        }
        if ticket.generation != self.generation {
            tracing::debug!(ticket = ticket.generation, current = self.generation, "dropping stale login");
            return Err(StaleLogin);
        }
        self.login(token, user);
        Ok(&self.session)
    }

    /// Re-read durable storage, e.g. after another tab wrote to it.
    ///
    /// Returns `true` when the session changed (observers were notified).
    pub fn reload(&mut self) -> bool {
        let loaded = self.store.load();
        if loaded == self.session {
            return false;
        }
        tracing::info!(authenticated = loaded.is_authenticated(), "session changed in storage");
        self.replace(loaded);
        true
    }

    /// Register an observer called synchronously after every mutation.
    pub fn subscribe(&mut self, observer: impl Fn(&Session) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sid, _)| *sid != id);
        self.observers.len() != before
    }

    fn replace(&mut self, session: Session) {
        self.session = session;
        self.generation += 1;
        for (_, observer) in &self.observers {
            observer(&self.session);
        }
    }
}

impl<S> std::fmt::Debug for AuthContext<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthContext")
            .field("session", &self.session)
            .field("generation", &self.generation)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}
