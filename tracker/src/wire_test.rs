use super::*;

#[test]
fn approve_endpoint_formats_user_id() {
    assert_eq!(approve_user_endpoint("17"), "/admin/users/17/approve");
}

#[test]
fn join_url_handles_slashes() {
    assert_eq!(join_url("http://h/api/", "/logs"), "http://h/api/logs");
    assert_eq!(join_url("/api", "auth/login"), "/api/auth/login");
}

#[test]
fn admin_user_accepts_numeric_id() {
    let user: AdminUser = serde_json::from_value(serde_json::json!({
        "user_id": 4,
        "email": "p@example.com",
        "role": "Employee",
        "status": "Pending",
        "created_at": "2025-10-29T10:00:00Z"
    }))
    .expect("admin user");
    assert_eq!(user.user_id, "4");
    assert!(user.is_pending());
    assert!(user.is_employee());
}

#[test]
fn assignable_users_keeps_employees_only() {
    let make = |id: &str, role: &str| AdminUser {
        user_id: id.to_owned(),
        email: format!("{id}@example.com"),
        role: role.to_owned(),
        status: "Approved".to_owned(),
        created_at: None,
    };
    let users = vec![make("1", "Admin"), make("2", "employee"), make("3", "Manager")];
    let picked: Vec<&str> = assignable_users(&users).iter().map(|u| u.user_id.as_str()).collect();
    assert_eq!(picked, ["2"]);
}

#[test]
fn time_log_tolerates_missing_optional_fields() {
    let log: TimeLog = serde_json::from_str(r#"{"log_id":1,"hours_logged":2.5}"#).expect("log");
    assert_eq!(log.task_name, "");
    assert_eq!(log.work_date, None);
}
