//! Command-line surface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::{DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};

#[derive(Parser, Debug)]
#[command(name = "worktrack", about = "Daily Work Tracker terminal client", version)]
pub struct Cli {
    #[arg(long, env = "WORKTRACK_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    #[arg(long, env = "WORKTRACK_SESSION_FILE")]
    pub session_file: Option<PathBuf>,

    #[arg(long, env = "WORKTRACK_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    #[arg(long, env = "WORKTRACK_LOG")]
    pub log: Option<String>,

    /// Raise log verbosity (repeatable).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Print raw JSON instead of tables.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sign in and store the session.
    Login(LoginArgs),
    /// Forget the stored session.
    Logout,
    /// Create an account (an admin must approve it).
    Register(RegisterArgs),
    /// Show the stored session and available navigation.
    Whoami,
    /// Show what the route guard decides for a path.
    Route { path: String },
    /// Tasks you can log time against.
    Tasks,
    #[command(subcommand)]
    Logs(LogsCommand),
    #[command(subcommand)]
    Admin(AdminCommand),
}

#[derive(Args, Debug)]
pub struct LoginArgs {
    #[arg(long)]
    pub email: String,
    /// Read from stdin when omitted.
    #[arg(long, env = "WORKTRACK_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

#[derive(Args, Debug)]
pub struct RegisterArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long, env = "WORKTRACK_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum LogsCommand {
    /// Your log history.
    List,
    /// Log hours against a task.
    Submit {
        #[arg(long)]
        task: String,
        #[arg(long)]
        hours: String,
        #[arg(long)]
        description: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum AdminCommand {
    /// All registered accounts.
    Users,
    /// Approve a pending account.
    Approve { user_id: String },
    /// Assign a new task to an employee.
    Assign {
        #[arg(long)]
        employee: String,
        #[arg(long)]
        description: String,
        #[arg(long, default_value = "")]
        name: String,
    },
}
