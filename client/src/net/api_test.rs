use super::*;

#[test]
fn endpoints_are_prefixed_with_api_base() {
    assert_eq!(endpoint(tracker::wire::LOGIN_ENDPOINT), "/api/auth/login");
    assert_eq!(endpoint(&tracker::wire::approve_user_endpoint("12")), "/api/admin/users/12/approve");
}

#[test]
fn bearer_header_value() {
    assert_eq!(bearer("abc"), "Bearer abc");
}

#[test]
fn failure_message_prefers_server_text() {
    assert_eq!(failure_message(409, r#"{"message":"Email already registered"}"#), "Email already registered");
    assert_eq!(failure_message(400, r#"{"error":"Too many hours"}"#), "Too many hours");
}

#[test]
fn failure_message_falls_back_to_status() {
    assert_eq!(failure_message(502, "<html>Bad Gateway</html>"), "request failed: 502");
    assert_eq!(failure_message(500, ""), "request failed: 500");
}

