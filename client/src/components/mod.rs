pub mod access_denied;
pub mod guarded;
pub mod log_history;
pub mod nav_bar;
pub mod task_assignment;
pub mod time_log_form;
pub mod user_table;
