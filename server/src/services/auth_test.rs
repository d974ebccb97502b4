use super::*;

#[test]
fn normalize_email_lowercases_and_trims() {
    assert_eq!(normalize_email("  Joe@Example.COM  "), Some("joe@example.com".to_owned()));
}

#[test]
fn normalize_email_rejects_malformed_input() {
    assert_eq!(normalize_email(""), None);
    assert_eq!(normalize_email("joe"), None);
    assert_eq!(normalize_email("@example.com"), None);
    assert_eq!(normalize_email("joe@"), None);
    assert_eq!(normalize_email("a@b@c"), None);
}

#[test]
fn generate_salt_is_32_hex_chars_and_random() {
    let salt = generate_salt();
    assert_eq!(salt.len(), 32);
    assert!(salt.chars().all(|c| c.is_ascii_hexdigit()));
    assert_ne!(salt, generate_salt());
}

#[test]
fn hash_password_is_deterministic_per_salt() {
    assert_eq!(hash_password("salt", "hunter2"), hash_password("salt", "hunter2"));
    assert_ne!(hash_password("salt-a", "hunter2"), hash_password("salt-b", "hunter2"));
    assert_ne!(hash_password("salt", "hunter2"), hash_password("salt", "hunter3"));
}

#[test]
fn verify_password_round_trips() {
    let salt = generate_salt();
    let hash = hash_password(&salt, "correct horse");
    assert!(verify_password(&salt, &hash, "correct horse"));
    assert!(!verify_password(&salt, &hash, "wrong horse"));
}

#[test]
fn hash_is_sha256_sized() {
    assert_eq!(hash_password("s", "p").len(), 64);
}
