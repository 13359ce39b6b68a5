pub mod admin_dashboard;
pub mod employee_dashboard;
pub mod login;
pub mod register;
