use super::*;

#[test]
fn parse_is_case_insensitive() {
    assert_eq!(Role::parse("Admin"), Role::Admin);
    assert_eq!(Role::parse("admin"), Role::Admin);
    assert_eq!(Role::parse("ADMIN"), Role::Admin);
    assert_eq!(Role::parse("employee"), Role::Employee);
    assert_eq!(Role::parse("Employee"), Role::Employee);
}

#[test]
fn parse_trims_whitespace() {
    assert_eq!(Role::parse("  Admin \n"), Role::Admin);
}

#[test]
fn parse_keeps_unknown_roles_verbatim() {
    assert_eq!(Role::parse("Manager"), Role::Unrecognized("Manager".to_owned()));
    assert_eq!(Role::parse(""), Role::Unrecognized(String::new()));
}

#[test]
fn canonical_spelling_is_capitalized() {
    assert_eq!(Role::parse("aDmIn").as_str(), "Admin");
    assert_eq!(Role::Employee.to_string(), "Employee");
    assert_eq!(Role::parse("Manager").to_string(), "Manager");
}

#[test]
fn only_admin_is_admin() {
    assert!(Role::Admin.is_admin());
    assert!(!Role::Employee.is_admin());
    assert!(!Role::Unrecognized("administrator".to_owned()).is_admin());
}

#[test]
fn serde_normalizes_on_read_and_writes_canonical() {
    let role: Role = serde_json::from_str("\"admin\"").expect("role");
    assert_eq!(role, Role::Admin);
    assert_eq!(serde_json::to_string(&role).expect("json"), "\"Admin\"");
}
