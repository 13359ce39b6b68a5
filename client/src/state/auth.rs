//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! One [`AuthContext`] per page, backed by `localStorage`. It is not `Send`,
//! so it lives in a local `StoredValue`; a mirrored `RwSignal<Session>` is
//! what components subscribe to. Every mutation goes through the context and
//! reaches the signal through its observer, so the two never disagree.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use tracker::{AuthContext, Credentials, LoginTicket, Session, StaleLogin, guard};

use crate::util::storage::BrowserStorage;

/// Copyable handle to the page's auth context, provided via `provide_context`.
#[derive(Clone, Copy)]
pub struct AuthHandle {
    context: StoredValue<AuthContext<BrowserStorage>, LocalStorage>,
    session: RwSignal<Session>,
}

impl AuthHandle {
    /// Restore the persisted session and start mirroring it into a signal.
    pub fn new() -> Self {
        let mut context = AuthContext::new(BrowserStorage);
        let session = RwSignal::new(context.session().clone());
        context.subscribe(move |current| session.set(current.clone()));
        Self { context: StoredValue::new_local(context), session }
    }

    /// Current session; tracked.
    pub fn session(&self) -> Session {
        self.session.get()
    }

    pub fn session_untracked(&self) -> Session {
        self.session.get_untracked()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(Session::is_authenticated)
    }

    /// Bearer token for API calls, read without subscribing.
    pub fn token(&self) -> Option<String> {
        self.session.with_untracked(|s| s.token().map(str::to_owned))
    }

    pub fn begin_login(&self) -> Option<LoginTicket> {
        self.context.try_update_value(AuthContext::begin_login)
    }

    /// Commit a login answer and return the landing page for the new role.
    ///
    /// # Errors
    ///
    /// Returns [`StaleLogin`] when the session changed while the request was
    /// in flight (logout, another login, or a write from another tab), or
    /// when a newer login attempt was started.
    pub fn complete_login(&self, ticket: LoginTicket, credentials: Credentials) -> Result<&'static str, StaleLogin> {
        self.context
            .try_update_value(|ctx| {
                ctx.complete_login(ticket, &credentials.token, credentials.user).map(guard::home_path)
            })
            .unwrap_or(Err(StaleLogin))
    }

    pub fn logout(&self) {
        self.context.update_value(AuthContext::logout);
    }

    /// Re-read `localStorage`; returns `true` when the session changed.
    pub fn reload(&self) -> bool {
        self.context.try_update_value(AuthContext::reload).unwrap_or(false)
    }
}

impl Default for AuthHandle {
    fn default() -> Self {
        Self::new()
    }
}
