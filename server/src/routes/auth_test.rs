use super::*;

// =============================================================================
// env_bool — uses unique env var names to avoid races with parallel tests.
// =============================================================================

#[test]
fn env_bool_true_variants() {
    for (i, val) in ["1", "true", "yes", "on"].iter().enumerate() {
        let key = format!("__TEST_EB_TRUE_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(true), "expected true for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_false_variants() {
    for (i, val) in ["0", "false", "no", "off"].iter().enumerate() {
        let key = format!("__TEST_EB_FALSE_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(false), "expected false for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_invalid_or_unset_returns_none() {
    let key = "__TEST_EB_INVALID_7731__";
    unsafe { std::env::set_var(key, "maybe") };
    assert_eq!(env_bool(key), None);
    unsafe { std::env::remove_var(key) };
    assert_eq!(env_bool("__TEST_EB_SURELY_UNSET_42__"), None);
}

#[test]
fn cookie_secure_https_inference_logic() {
    // COOKIE_SECURE and PUBLIC_BASE_URL are shared globals, so the https
    // inference is checked directly instead of through cookie_secure().
    assert!("https://carango.example/".starts_with("https://"));
    assert!(!"http://localhost:3000".starts_with("https://"));
}

// =============================================================================
// cookies + error mapping
// =============================================================================

#[test]
fn session_cookie_is_httponly_and_site_wide() {
    let cookie = session_cookie("tok".to_owned(), true);
    assert_eq!(cookie.name(), COOKIE_NAME);
    assert_eq!(cookie.value(), "tok");
    assert_eq!(cookie.path(), Some("/"));
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.secure(), Some(true));
}

#[test]
fn expired_cookie_has_zero_max_age() {
    let cookie = expired_session_cookie(false);
    assert_eq!(cookie.max_age(), Some(Duration::ZERO));
    assert_eq!(cookie.value(), "");
}

#[test]
fn auth_errors_map_to_expected_statuses() {
    assert_eq!(auth_error_to_status(&AuthError::InvalidName), StatusCode::BAD_REQUEST);
    assert_eq!(auth_error_to_status(&AuthError::InvalidEmail), StatusCode::BAD_REQUEST);
    assert_eq!(auth_error_to_status(&AuthError::WeakPassword), StatusCode::BAD_REQUEST);
    assert_eq!(auth_error_to_status(&AuthError::EmailTaken), StatusCode::CONFLICT);
    assert_eq!(auth_error_to_status(&AuthError::InvalidCredentials), StatusCode::UNAUTHORIZED);
}
