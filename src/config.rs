//! Runtime configuration resolved from flags, environment and `.env`.
//!
//! Variables (each also settable by flag):
//! - `WORKTRACK_API_URL`: API base, default [`DEFAULT_API_URL`]
//! - `WORKTRACK_SESSION_FILE`: session file, default `<config dir>/worktrack/session.json`
//! - `WORKTRACK_TIMEOUT_SECS`: request timeout, default [`DEFAULT_TIMEOUT_SECS`]
//! - `WORKTRACK_LOG`: `error`, `warn` (default), `info`, `debug` or `trace`

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;
use std::time::Duration;

use tracing::Level;

pub const DEFAULT_API_URL: &str = "http://localhost:3000/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
pub const SESSION_FILE_NAME: &str = "session.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_url: String,
    pub session_file: Option<PathBuf>,
    pub timeout: Duration,
    pub log_level: Level,
}

impl Config {
    /// Combine parsed flag values into a config. `session_file` falls back
    /// to the platform config directory; `None` means no usable location.
    pub fn resolve(
        api_url: &str,
        session_file: Option<PathBuf>,
        timeout_secs: u64,
        log: Option<&str>,
        verbose: u8,
    ) -> Self {
        Self {
            api_url: api_url.trim().trim_end_matches('/').to_owned(),
            session_file: session_file.or_else(default_session_path),
            timeout: Duration::from_secs(timeout_secs.max(1)),
            log_level: parse_log_level(log, verbose),
        }
    }
}

/// `<config dir>/worktrack/session.json`, if the platform has a config dir.
pub fn default_session_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "worktrack").map(|dirs| dirs.config_dir().join(SESSION_FILE_NAME))
}

/// Each `-v` raises the level one step above the configured base.
pub fn parse_log_level(raw: Option<&str>, verbose: u8) -> Level {
    let base = match raw.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        Some("error") => 0,
        Some("info") => 2,
        Some("debug") => 3,
        Some("trace") => 4,
        _ => 1,
    };
    match base + u32::from(verbose) {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        _ => Level::TRACE,
    }
}
