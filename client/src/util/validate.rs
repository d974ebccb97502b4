//! Form field validation shared by the login, register, and listing forms.
//!
//! DESIGN
//! ======
//! Each validator returns `None` when the field is acceptable or a static
//! message to render under the input. Pages keep one error signal per field.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

pub const MIN_PASSWORD_LEN: usize = 6;

/// Required free-text field.
#[must_use]
pub fn validate_required(value: &str) -> Option<&'static str> {
    if value.trim().is_empty() { Some("This field is required.") } else { None }
}

#[must_use]
pub fn validate_name(value: &str) -> Option<&'static str> {
    validate_required(value)
}

/// Minimal email shape check: one `@` with text on both sides.
#[must_use]
pub fn validate_email(value: &str) -> Option<&'static str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some("This field is required.");
    }
    let parts = trimmed.split('@').collect::<Vec<_>>();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
        return Some("Enter a valid email.");
    }
    None
}

#[must_use]
pub fn validate_password(value: &str) -> Option<&'static str> {
    if value.is_empty() {
        return Some("This field is required.");
    }
    if value.len() < MIN_PASSWORD_LEN {
        return Some("Password must be at least 6 characters.");
    }
    None
}

/// Login accepts any non-empty password; length is only enforced at signup.
#[must_use]
pub fn validate_login_password(value: &str) -> Option<&'static str> {
    if value.is_empty() { Some("This field is required.") } else { None }
}

/// Contact number: 11 or 12 digits, nothing else.
#[must_use]
pub fn validate_whatsapp(value: &str) -> Option<&'static str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some("This field is required.");
    }
    let digits_only = trimmed.chars().all(|c| c.is_ascii_digit());
    if !digits_only || !(11..=12).contains(&trimmed.len()) {
        return Some("Enter a valid phone number.");
    }
    None
}
