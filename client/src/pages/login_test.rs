use super::*;

#[test]
fn rejects_blank_fields() {
    let (email_err, password_err) = login_field_errors("", "");
    assert!(email_err.is_some());
    assert!(password_err.is_some());
}

#[test]
fn rejects_malformed_email_only() {
    let (email_err, password_err) = login_field_errors("not-an-email", "hunter2");
    assert!(email_err.is_some());
    assert!(password_err.is_none());
}

#[test]
fn accepts_any_nonempty_password() {
    // Length policy applies at signup, not sign-in.
    let (email_err, password_err) = login_field_errors("a@b.com", "x");
    assert!(email_err.is_none());
    assert!(password_err.is_none());
}
