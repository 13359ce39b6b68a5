//! REST API helpers for communicating with the backend.
//!
//! In the browser (`csr`): real HTTP calls via `gloo-net`, authenticated
//! with `Authorization: Bearer <token>`. Elsewhere: stubs returning an error,
//! since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs carrying a user-facing message (the server's
//! `message`/`error` field when it sent one) instead of panics, so a failed
//! fetch degrades one panel rather than the page.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use tracker::wire::{AdminUser, LoginRequest, NewTask, NewTimeLog, RegisterRequest, Task, TimeLog};
use tracker::{Credentials, LoginError};

/// Same-origin API prefix; the dev server proxies it to the backend.
pub const API_BASE: &str = "/api";

#[cfg(not(feature = "csr"))]
const NOT_IN_BROWSER: &str = "not available outside the browser";

#[cfg(any(test, feature = "csr"))]
fn endpoint(path: &str) -> String {
    tracker::wire::join_url(API_BASE, path)
}

#[cfg(any(test, feature = "csr"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "csr"))]
fn failure_message(status: u16, body: &str) -> String {
    tracker::login::error_message(body).unwrap_or_else(|| format!("request failed: {status}"))
}

#[cfg(feature = "csr")]
async fn ensure_ok(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, String> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    log::warn!("api request failed: status={status}");
    Err(failure_message(status, &body))
}

#[cfg(feature = "csr")]
async fn get_json<T: serde::de::DeserializeOwned>(path: &str, token: &str) -> Result<T, String> {
    let resp = gloo_net::http::Request::get(&endpoint(path))
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    ensure_ok(resp).await?.json::<T>().await.map_err(|e| e.to_string())
}

#[cfg(feature = "csr")]
async fn send_json<B: serde::Serialize>(
    builder: gloo_net::http::RequestBuilder,
    token: Option<&str>,
    body: &B,
) -> Result<(), String> {
    let builder = match token {
        Some(token) => builder.header("Authorization", &bearer(token)),
        None => builder,
    };
    let resp = builder
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    ensure_ok(resp).await.map(|_| ())
}

/// Exchange credentials for a token via `POST /api/auth/login`.
///
/// # Errors
///
/// [`LoginError::Transport`] when the request never completed; otherwise
/// whatever [`tracker::interpret_login_response`] makes of the answer.
pub async fn login(request: LoginRequest) -> Result<Credentials, LoginError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&endpoint(tracker::wire::LOGIN_ENDPOINT))
            .json(&request)
            .map_err(|e| LoginError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| LoginError::Transport(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| LoginError::Transport(e.to_string()))?;
        tracker::interpret_login_response(status, &body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = request;
        Err(LoginError::Transport(NOT_IN_BROWSER.to_owned()))
    }
}

/// Create a pending account via `POST /api/auth/register`.
///
/// # Errors
///
/// Returns the server's message (e.g. email already registered).
pub async fn register(request: RegisterRequest) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        let builder = gloo_net::http::Request::post(&endpoint(tracker::wire::REGISTER_ENDPOINT));
        send_json(builder, None, &request).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = request;
        Err(NOT_IN_BROWSER.to_owned())
    }
}

/// Tasks assigned to the signed-in employee.
///
/// # Errors
///
/// Returns an error string if the request or decoding fails.
pub async fn fetch_tasks(token: String) -> Result<Vec<Task>, String> {
    #[cfg(feature = "csr")]
    {
        get_json(tracker::wire::TASKS_ENDPOINT, &token).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = token;
        Err(NOT_IN_BROWSER.to_owned())
    }
}

/// Log history of the signed-in employee, newest first.
///
/// # Errors
///
/// Returns an error string if the request or decoding fails.
pub async fn fetch_logs(token: String) -> Result<Vec<TimeLog>, String> {
    #[cfg(feature = "csr")]
    {
        get_json(tracker::wire::LOGS_ENDPOINT, &token).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = token;
        Err(NOT_IN_BROWSER.to_owned())
    }
}

/// Submit one time log via `POST /api/logs/log`.
///
/// # Errors
///
/// Returns the server's validation message on rejection.
pub async fn submit_log(token: String, log: NewTimeLog) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        let builder = gloo_net::http::Request::post(&endpoint(tracker::wire::SUBMIT_LOG_ENDPOINT));
        send_json(builder, Some(&token), &log).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, log);
        Err(NOT_IN_BROWSER.to_owned())
    }
}

/// Every account, for the admin dashboard.
///
/// # Errors
///
/// Returns an error string if the request or decoding fails.
pub async fn fetch_users(token: String) -> Result<Vec<AdminUser>, String> {
    #[cfg(feature = "csr")]
    {
        get_json(tracker::wire::ADMIN_USERS_ENDPOINT, &token).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = token;
        Err(NOT_IN_BROWSER.to_owned())
    }
}

/// Approve a pending account via `PUT /api/admin/users/{id}/approve`.
///
/// # Errors
///
/// Returns the server's message on rejection.
pub async fn approve_user(token: String, user_id: String) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::put(&endpoint(&tracker::wire::approve_user_endpoint(&user_id)))
            .header("Authorization", &bearer(&token))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        ensure_ok(resp).await.map(|_| ())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, user_id);
        Err(NOT_IN_BROWSER.to_owned())
    }
}

/// Create and assign a task via `POST /api/admin/tasks`.
///
/// # Errors
///
/// Returns the server's message on rejection.
pub async fn assign_task(token: String, task: NewTask) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        let builder = gloo_net::http::Request::post(&endpoint(tracker::wire::ADMIN_TASKS_ENDPOINT));
        send_json(builder, Some(&token), &task).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, task);
        Err(NOT_IN_BROWSER.to_owned())
    }
}
