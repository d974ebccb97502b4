use super::*;

#[test]
fn required_rejects_blank_and_whitespace() {
    assert!(validate_required("").is_some());
    assert!(validate_required("   ").is_some());
    assert!(validate_required("Onix").is_none());
}

#[test]
fn email_needs_text_on_both_sides_of_at() {
    assert!(validate_email("user@example.com").is_none());
    assert!(validate_email("  user@example.com  ").is_none());
    assert!(validate_email("").is_some());
    assert!(validate_email("userexample.com").is_some());
    assert!(validate_email("@example.com").is_some());
    assert!(validate_email("user@").is_some());
    assert!(validate_email("a@b@c").is_some());
}

#[test]
fn password_enforces_minimum_length_at_signup() {
    assert!(validate_password("").is_some());
    assert!(validate_password("12345").is_some());
    assert!(validate_password("123456").is_none());
}

#[test]
fn login_password_only_needs_presence() {
    assert!(validate_login_password("").is_some());
    assert!(validate_login_password("x").is_none());
}

#[test]
fn whatsapp_accepts_11_or_12_digits() {
    assert!(validate_whatsapp("48999850058").is_none());
    assert!(validate_whatsapp("554899985005").is_none());
    assert!(validate_whatsapp("").is_some());
    assert!(validate_whatsapp("4899985005").is_some()); // 10 digits
    assert!(validate_whatsapp("5548999850058").is_some()); // 13 digits
    assert!(validate_whatsapp("(48) 99985-0058").is_some());
}
