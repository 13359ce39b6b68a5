//! CLI error type.

use tracker::forms::FormError;
use tracker::{LoginError, StaleLogin};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("not signed in; run `worktrack login` first")]
    NoSession,
    #[error("{0}")]
    Login(#[from] LoginError),
    #[error("login superseded: {0}")]
    Stale(#[from] StaleLogin),
    #[error("{0}")]
    Form(#[from] FormError),
    #[error("{path} is not available to this account (go to {to})")]
    Redirected { path: String, to: &'static str },
    #[error("access denied: unknown role `{role}`")]
    AccessDenied { role: String },
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {message}")]
    Api { status: u16, message: String },
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("could not read input: {0}")]
    Io(#[from] std::io::Error),
}
