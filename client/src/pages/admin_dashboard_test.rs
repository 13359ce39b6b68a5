use super::*;

fn user(id: &str, role: &str, status: &str) -> AdminUser {
    AdminUser {
        user_id: id.to_owned(),
        email: format!("{id}@example.com"),
        role: role.to_owned(),
        status: status.to_owned(),
        created_at: None,
    }
}

#[test]
fn pending_summary_counts_pending_accounts() {
    assert_eq!(pending_summary(&[]), "No accounts awaiting approval.");
    assert_eq!(pending_summary(&[user("1", "Employee", "Pending")]), "1 account awaiting approval.");
    let users = [user("1", "Employee", "Pending"), user("2", "Employee", "pending"), user("3", "Admin", "Active")];
    assert_eq!(pending_summary(&users), "2 accounts awaiting approval.");
}

#[test]
fn only_employees_are_assignable() {
    let users = [user("1", "Employee", "Active"), user("2", "Admin", "Active")];
    let ids: Vec<&str> = assignable_users(&users).iter().map(|u| u.user_id.as_str()).collect();
    assert_eq!(ids, ["1"]);
}
