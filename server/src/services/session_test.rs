use super::*;

#[test]
fn bytes_to_hex_formats_lowercase_pairs() {
    assert_eq!(bytes_to_hex(&[0x00, 0x0f, 0xff]), "000fff");
    assert_eq!(bytes_to_hex(&[]), "");
}

#[test]
fn generate_token_is_64_hex_chars() {
    let token = generate_token();
    assert_eq!(token.len(), 64);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn generate_token_is_not_repeated() {
    assert_ne!(generate_token(), generate_token());
}

#[test]
fn session_user_serializes_public_fields() {
    let user = SessionUser {
        id: Uuid::nil(),
        name: "Ann".to_owned(),
        email: "a@x.com".to_owned(),
    };
    let json = serde_json::to_value(&user).unwrap();
    assert_eq!(json["name"], "Ann");
    assert_eq!(json["email"], "a@x.com");
}
