//! Session and authorization core for the Daily Work Tracker clients.
//!
//! This crate owns everything both front ends agree on: the session model,
//! its durable store, the observable auth context, the route guard, the
//! navigation shell, login response interpretation, form validation, and
//! the REST wire types. It has no UI framework or HTTP dependency; the
//! Leptos client and the `worktrack` CLI plug in their own [`Storage`]
//! backend and transport.
//!
//! DATA FLOW
//! =========
//! login form -> API -> [`interpret_login_response`] -> [`AuthContext::complete_login`]
//! -> [`SessionStore::commit`] -> observers -> [`guard::decide`] / [`nav::nav_links_for`].

pub mod context;
pub mod forms;
pub mod guard;
pub mod login;
pub mod nav;
pub mod role;
pub mod session;
pub mod storage;
pub mod store;
pub mod wire;

pub use context::{AuthContext, LoginTicket, StaleLogin, SubscriptionId};
pub use guard::{AccessState, GuardDecision, RouteAccess};
pub use login::{LoginError, interpret_login_response};
pub use role::Role;
pub use session::{Credentials, Session, User};
pub use storage::{MemoryStorage, Storage, StorageError};
pub use store::SessionStore;
