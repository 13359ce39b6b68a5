use super::*;

#[test]
fn message_names_the_role() {
    assert_eq!(
        access_denied_message(" Manager "),
        "Your account role \"Manager\" is not recognized. Contact an administrator."
    );
}

#[test]
fn message_for_missing_role() {
    assert_eq!(access_denied_message(""), "Your account has no role assigned. Contact an administrator.");
}
