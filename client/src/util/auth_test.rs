use super::*;

#[test]
fn redirect_target_only_for_redirects() {
    assert_eq!(redirect_target(&GuardDecision::Redirect("/login")), Some("/login"));
    assert_eq!(redirect_target(&GuardDecision::Render), None);
    assert_eq!(redirect_target(&GuardDecision::AccessDenied { role: "Manager".to_owned() }), None);
}

#[test]
fn guard_navigation_replaces_history() {
    let options = replace_options();
    assert!(options.replace);
    assert!(options.scroll);
}
