use super::*;

#[test]
fn attempts_under_the_limit_pass() {
    let limiter = RateLimiter::new();
    let now = Instant::now();
    for _ in 0..DEFAULT_PER_ACCOUNT_LIMIT {
        limiter.check_and_record_at("a@x.com", now).unwrap();
    }
}

#[test]
fn per_account_limit_blocks_the_next_attempt() {
    let limiter = RateLimiter::new();
    let now = Instant::now();
    for _ in 0..DEFAULT_PER_ACCOUNT_LIMIT {
        limiter.check_and_record_at("a@x.com", now).unwrap();
    }
    assert!(matches!(
        limiter.check_and_record_at("a@x.com", now),
        Err(RateLimitError::PerAccountExceeded { .. })
    ));
}

#[test]
fn accounts_are_limited_independently() {
    let limiter = RateLimiter::new();
    let now = Instant::now();
    for _ in 0..DEFAULT_PER_ACCOUNT_LIMIT {
        limiter.check_and_record_at("a@x.com", now).unwrap();
    }
    limiter.check_and_record_at("b@x.com", now).unwrap();
}

#[test]
fn attempts_expire_after_the_window() {
    let limiter = RateLimiter::new();
    let start = Instant::now();
    for _ in 0..DEFAULT_PER_ACCOUNT_LIMIT {
        limiter.check_and_record_at("a@x.com", start).unwrap();
    }
    let later = start + Duration::from_secs(DEFAULT_PER_ACCOUNT_WINDOW_SECS + 1);
    limiter.check_and_record_at("a@x.com", later).unwrap();
}

#[test]
fn blocked_attempts_are_not_recorded() {
    let limiter = RateLimiter::new();
    let start = Instant::now();
    for _ in 0..DEFAULT_PER_ACCOUNT_LIMIT {
        limiter.check_and_record_at("a@x.com", start).unwrap();
    }
    // Hammering while blocked must not extend the lockout.
    for _ in 0..10 {
        let _ = limiter.check_and_record_at("a@x.com", start);
    }
    let later = start + Duration::from_secs(DEFAULT_PER_ACCOUNT_WINDOW_SECS + 1);
    limiter.check_and_record_at("a@x.com", later).unwrap();
}

#[test]
fn global_limit_applies_across_accounts() {
    let limiter = RateLimiter::new();
    let now = Instant::now();
    for i in 0..DEFAULT_GLOBAL_LIMIT {
        limiter.check_and_record_at(&format!("user{i}@x.com"), now).unwrap();
    }
    assert!(matches!(
        limiter.check_and_record_at("fresh@x.com", now),
        Err(RateLimitError::GlobalExceeded { .. })
    ));
}
