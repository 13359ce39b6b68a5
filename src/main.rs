mod api;
mod cli;
mod commands;
mod config;
mod error;
mod storage;

use std::process::ExitCode;

use clap::Parser;
use tracker::AuthContext;

use crate::api::ApiClient;
use crate::cli::Cli;
use crate::commands::App;
use crate::config::Config;
use crate::storage::FileStorage;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env is the normal case.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = Config::resolve(&cli.api_url, cli.session_file, cli.timeout_secs, cli.log.as_deref(), cli.verbose);

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(config.log_level)
        .with_target(false)
        .init();

    let storage = match &config.session_file {
        Some(path) => FileStorage::new(path),
        None => {
            tracing::warn!("no config directory found, session will not be saved");
            FileStorage::unavailable()
        }
    };
    tracing::debug!(api_url = %config.api_url, session_file = ?storage.path(), "worktrack starting");

    let api = match ApiClient::new(&config.api_url, config.timeout) {
        Ok(api) => api,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut app = App::new(api, AuthContext::new(storage), cli.json);
    match app.run(cli.command).await {
        Ok(out) => {
            println!("{out}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
