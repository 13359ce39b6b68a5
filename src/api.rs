//! Work-tracker REST client.
//!
//! Thin `reqwest` wrapper: one method per endpoint, bearer token taken from
//! the session passed in. Login goes through
//! [`tracker::interpret_login_response`] so the CLI and the browser agree on
//! what counts as a usable session.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::time::Duration;

use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracker::login::error_message;
use tracker::wire::{
    self, AdminUser, LoginRequest, NewTask, NewTimeLog, RegisterRequest, Task, TimeLog, approve_user_endpoint,
    join_url,
};
use tracker::{Credentials, LoginError, Session};

use crate::error::CliError;

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`CliError::Http`] if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, CliError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_owned() })
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    /// `POST /auth/login`. Does not touch any session state.
    ///
    /// # Errors
    ///
    /// [`LoginError::Transport`] when no response arrives, otherwise whatever
    /// [`tracker::interpret_login_response`] decides.
    pub async fn login(&self, request: &LoginRequest) -> Result<Credentials, LoginError> {
        let resp = self
            .http
            .post(self.url(wire::LOGIN_ENDPOINT))
            .json(request)
            .send()
            .await
            .map_err(|e| LoginError::Transport(e.to_string()))?;
        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(|e| LoginError::Transport(e.to_string()))?;
        tracing::debug!(status, "login response received");
        tracker::interpret_login_response(status, &body)
    }

    /// `POST /auth/register`.
    ///
    /// # Errors
    ///
    /// [`CliError::Api`] with the server's message on rejection.
    pub async fn register(&self, request: &RegisterRequest) -> Result<(), CliError> {
        let resp = self.http.post(self.url(wire::REGISTER_ENDPOINT)).json(request).send().await?;
        check(resp).await.map(drop)
    }

    /// # Errors
    ///
    /// [`CliError::NoSession`] without a token, [`CliError::Api`] on non-2xx.
    pub async fn tasks(&self, session: &Session) -> Result<Vec<Task>, CliError> {
        self.get_json(session, wire::TASKS_ENDPOINT).await
    }

    /// # Errors
    ///
    /// [`CliError::NoSession`] without a token, [`CliError::Api`] on non-2xx.
    pub async fn logs(&self, session: &Session) -> Result<Vec<TimeLog>, CliError> {
        self.get_json(session, wire::LOGS_ENDPOINT).await
    }

    /// # Errors
    ///
    /// [`CliError::NoSession`] without a token, [`CliError::Api`] on non-2xx.
    pub async fn submit_log(&self, session: &Session, log: &NewTimeLog) -> Result<(), CliError> {
        let resp = self.authed(Method::POST, wire::SUBMIT_LOG_ENDPOINT, session)?.json(log).send().await?;
        check(resp).await.map(drop)
    }

    /// # Errors
    ///
    /// [`CliError::NoSession`] without a token, [`CliError::Api`] on non-2xx.
    pub async fn users(&self, session: &Session) -> Result<Vec<AdminUser>, CliError> {
        self.get_json(session, wire::ADMIN_USERS_ENDPOINT).await
    }

    /// # Errors
    ///
    /// [`CliError::NoSession`] without a token, [`CliError::Api`] on non-2xx.
    pub async fn approve_user(&self, session: &Session, user_id: &str) -> Result<(), CliError> {
        let resp = self.authed(Method::PUT, &approve_user_endpoint(user_id), session)?.send().await?;
        check(resp).await.map(drop)
    }

    /// # Errors
    ///
    /// [`CliError::NoSession`] without a token, [`CliError::Api`] on non-2xx.
    pub async fn assign_task(&self, session: &Session, task: &NewTask) -> Result<(), CliError> {
        let resp = self.authed(Method::POST, wire::ADMIN_TASKS_ENDPOINT, session)?.json(task).send().await?;
        check(resp).await.map(drop)
    }

    async fn get_json<T: DeserializeOwned>(&self, session: &Session, path: &str) -> Result<T, CliError> {
        let resp = self.authed(Method::GET, path, session)?.send().await?;
        let body = check(resp).await?.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    fn authed(&self, method: Method, path: &str, session: &Session) -> Result<RequestBuilder, CliError> {
        let bearer = session.bearer().ok_or(CliError::NoSession)?;
        Ok(self.http.request(method, self.url(path)).header(reqwest::header::AUTHORIZATION, bearer))
    }
}

/// Pass 2xx responses through, turn everything else into [`CliError::Api`].
async fn check(resp: Response) -> Result<Response, CliError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    let message = error_message(&body).unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed").to_owned());
    tracing::debug!(status = status.as_u16(), %message, "api request rejected");
    Err(CliError::Api { status: status.as_u16(), message })
}
