//! Subcommand handlers.
//!
//! Each handler returns the text to print. Protected commands go through the
//! same route guard as the browser: employee commands are guarded as
//! `/employee/dashboard`, admin commands as `/admin`.

#[cfg(test)]
#[path = "commands_test.rs"]
mod commands_test;

use std::fmt::Write as _;
use std::io::BufRead;

use serde::Serialize;
use tracker::guard::{self, ADMIN_DASHBOARD_PATH, EMPLOYEE_DASHBOARD_PATH, GuardDecision};
use tracker::nav::{NavTarget, nav_links_for};
use tracker::wire::{AdminUser, Task, TimeLog};
use tracker::{AuthContext, Session, Storage, forms};

use crate::api::ApiClient;
use crate::cli::{AdminCommand, Command, LoginArgs, LogsCommand, RegisterArgs};
use crate::error::CliError;

/// Everything a command needs: the API, the session, and output mode.
pub struct App<S> {
    pub api: ApiClient,
    pub auth: AuthContext<S>,
    pub json: bool,
}

impl<S: Storage> App<S> {
    pub fn new(api: ApiClient, auth: AuthContext<S>, json: bool) -> Self {
        Self { api, auth, json }
    }

    /// # Errors
    ///
    /// Any [`CliError`] raised by validation, the guard, or the API.
    pub async fn run(&mut self, command: Command) -> Result<String, CliError> {
        match command {
            Command::Login(args) => self.login(args).await,
            Command::Logout => Ok(self.logout()),
            Command::Register(args) => self.register(args).await,
            Command::Whoami => Ok(describe_session(self.auth.session())),
            Command::Route { path } => Ok(describe_decision(&path, &guard::resolve(&path, self.auth.session()))),
            Command::Tasks => {
                let session = self.guarded(EMPLOYEE_DASHBOARD_PATH)?;
                let tasks = self.api.tasks(&session).await?;
                self.output(&tasks, render_tasks)
            }
            Command::Logs(LogsCommand::List) => {
                let session = self.guarded(EMPLOYEE_DASHBOARD_PATH)?;
                let logs = self.api.logs(&session).await?;
                self.output(&logs, render_logs)
            }
            Command::Logs(LogsCommand::Submit { task, hours, description }) => {
                let log = forms::validate_time_log(&task, &hours, &description)?;
                let session = self.guarded(EMPLOYEE_DASHBOARD_PATH)?;
                self.api.submit_log(&session, &log).await?;
                Ok(format!("Logged {} on task {}.", forms::format_hours(log.hours_logged), log.task_id))
            }
            Command::Admin(AdminCommand::Users) => {
                let session = self.guarded(ADMIN_DASHBOARD_PATH)?;
                let users = self.api.users(&session).await?;
                self.output(&users, render_users)
            }
            Command::Admin(AdminCommand::Approve { user_id }) => {
                let user_id = forms::validate_user_id(&user_id)?;
                let session = self.guarded(ADMIN_DASHBOARD_PATH)?;
                self.api.approve_user(&session, &user_id).await?;
                Ok(format!("Approved user {user_id}."))
            }
            Command::Admin(AdminCommand::Assign { employee, description, name }) => {
                let task = forms::validate_task_assignment(&name, &description, &employee)?;
                let session = self.guarded(ADMIN_DASHBOARD_PATH)?;
                self.api.assign_task(&session, &task).await?;
                Ok(format!("Assigned \"{}\" to user {}.", task.task_name, task.assigned_to))
            }
        }
    }

    async fn login(&mut self, args: LoginArgs) -> Result<String, CliError> {
        let password = password_or_stdin(args.password)?;
        let request = forms::validate_login(&args.email, &password)?;

        let ticket = self.auth.begin_login();
        let creds = self.api.login(&request).await?;
        let session = self.auth.complete_login(ticket, &creds.token, creds.user)?;

        let user = session.user().ok_or(CliError::NoSession)?;
        Ok(format!("Signed in as {} ({}). Home: {}", user.email, user.role, guard::home_path(session)))
    }

    fn logout(&mut self) -> String {
        let was_signed_in = self.auth.is_authenticated();
        self.auth.logout();
        if was_signed_in { "Signed out.".to_owned() } else { "Already signed out.".to_owned() }
    }

    async fn register(&mut self, args: RegisterArgs) -> Result<String, CliError> {
        let password = password_or_stdin(args.password)?;
        let request = forms::validate_register(&args.name, &args.email, &password)?;
        self.api.register(&request).await?;
        Ok("Registration successful! Please wait for an administrator to approve your account.".to_owned())
    }

    /// Session snapshot if the guard renders `path` for it.
    fn guarded(&self, path: &str) -> Result<Session, CliError> {
        let session = self.auth.session();
        require(path, session)?;
        Ok(session.clone())
    }

    fn output<T: Serialize>(&self, rows: &[T], render: fn(&[T]) -> String) -> Result<String, CliError> {
        if self.json { Ok(serde_json::to_string_pretty(rows)?) } else { Ok(render(rows)) }
    }
}

/// Map a guard decision onto the CLI: render is `Ok`, anything else an error.
///
/// # Errors
///
/// [`CliError::NoSession`] when signed out, [`CliError::Redirected`] for a
/// role mismatch, [`CliError::AccessDenied`] for unknown roles.
pub fn require(path: &str, session: &Session) -> Result<(), CliError> {
    match guard::resolve(path, session) {
        GuardDecision::Render => Ok(()),
        GuardDecision::Redirect(guard::LOGIN_PATH) => Err(CliError::NoSession),
        GuardDecision::Redirect(to) => Err(CliError::Redirected { path: path.to_owned(), to }),
        GuardDecision::AccessDenied { role } => Err(CliError::AccessDenied { role }),
    }
}

pub fn describe_decision(path: &str, decision: &GuardDecision) -> String {
    match decision {
        GuardDecision::Render => format!("{path}: render"),
        GuardDecision::Redirect(to) => format!("{path}: redirect to {to}"),
        GuardDecision::AccessDenied { role } => format!("{path}: access denied (unknown role `{role}`)"),
    }
}

pub fn describe_session(session: &Session) -> String {
    let mut out = match session.user() {
        Some(user) => format!("Signed in as {} (id {}, role {})\n", user.email, user.id, user.role),
        None => "Not signed in\n".to_owned(),
    };
    let links: Vec<String> = nav_links_for(session)
        .into_iter()
        .map(|link| match link.target {
            NavTarget::Path(path) => format!("{} [{path}]", link.label),
            NavTarget::Logout => link.label.to_owned(),
        })
        .collect();
    let _ = write!(out, "Navigation: {}", links.join(" | "));
    out
}

pub fn render_tasks(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "No tasks assigned.".to_owned();
    }
    let mut out = format!("{:<6} {}\n", "ID", "TASK");
    for task in tasks {
        let _ = writeln!(out, "{:<6} {}", task.task_id, task.task_name);
    }
    out.trim_end().to_owned()
}

pub fn render_logs(logs: &[TimeLog]) -> String {
    if logs.is_empty() {
        return "No log history found. Submit your first work log!".to_owned();
    }
    let mut out = format!("{:<12} {:<24} {:>7}  {}\n", "DATE", "TASK", "TIME", "DESCRIPTION");
    for log in logs {
        let _ = writeln!(
            out,
            "{:<12} {:<24} {:>7}  {}",
            forms::format_date(log.work_date.as_deref()),
            log.task_name,
            forms::format_hours(log.hours_logged),
            forms::summarize(&log.description)
        );
    }
    out.trim_end().to_owned()
}

pub fn render_users(users: &[AdminUser]) -> String {
    if users.is_empty() {
        return "No users found.".to_owned();
    }
    let mut out = format!("{:<6} {:<28} {:<10} {}\n", "ID", "EMAIL", "ROLE", "STATUS");
    for user in users {
        let _ = writeln!(out, "{:<6} {:<28} {:<10} {}", user.user_id, user.email, user.role, user.status);
    }
    out.trim_end().to_owned()
}

fn password_or_stdin(password: Option<String>) -> Result<String, CliError> {
    if let Some(password) = password {
        return Ok(password);
    }
    eprint!("Password: ");
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_owned())
}
