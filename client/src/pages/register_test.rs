use super::*;

#[test]
fn all_fields_required() {
    let errors = register_field_errors("", "", "");
    assert!(errors.name.is_some());
    assert!(errors.email.is_some());
    assert!(errors.password.is_some());
    assert!(errors.any());
}

#[test]
fn short_password_rejected_at_signup() {
    let errors = register_field_errors("Joe", "joe@x.com", "12345");
    assert!(errors.name.is_none());
    assert!(errors.email.is_none());
    assert!(errors.password.is_some());
}

#[test]
fn valid_form_has_no_errors() {
    let errors = register_field_errors("Joe", "joe@x.com", "123456");
    assert!(!errors.any());
}
