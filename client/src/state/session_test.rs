use super::*;

fn user(id: &str, name: &str, email: &str) -> User {
    User { id: id.to_owned(), name: name.to_owned(), email: email.to_owned() }
}

#[test]
fn starts_loading_and_signed_out() {
    let state = SessionState::default();
    assert!(state.loading);
    assert!(!state.signed());
    assert_eq!(state.user, None);
}

#[test]
fn first_resolution_with_no_session_clears_loading() {
    let mut state = SessionState::default();
    state.resolve(None);
    assert!(!state.loading);
    assert!(!state.signed());
}

#[test]
fn first_resolution_with_user_signs_in() {
    let mut state = SessionState::default();
    state.resolve(Some(user("u1", "Ann", "a@x.com")));
    assert!(!state.loading);
    assert!(state.signed());
}

#[test]
fn loading_never_returns_after_any_notification_sequence() {
    let sequences: Vec<Vec<Option<User>>> = vec![
        vec![None],
        vec![Some(user("u1", "Ann", "a@x.com")), None],
        vec![None, Some(user("u2", "Joe", "j@x.com")), None, None],
        vec![Some(user("u1", "Ann", "a@x.com")), Some(user("u2", "Joe", "j@x.com"))],
    ];
    for notifications in sequences {
        let mut state = SessionState::default();
        assert!(state.loading);
        for notification in notifications {
            state.resolve(notification);
            assert!(!state.loading);
        }
    }
}

#[test]
fn signed_always_tracks_user_presence() {
    let mut state = SessionState::default();
    assert_eq!(state.signed(), state.user.is_some());
    state.resolve(Some(user("u1", "Ann", "a@x.com")));
    assert_eq!(state.signed(), state.user.is_some());
    state.resolve(None);
    assert_eq!(state.signed(), state.user.is_some());
    state.set_profile(user("u2", "Joe", "j@x.com"));
    assert_eq!(state.signed(), state.user.is_some());
    state.clear();
    assert_eq!(state.signed(), state.user.is_some());
}

#[test]
fn set_profile_applies_immediately_even_while_loading() {
    // Registration hydrates the profile before any server notification.
    let mut state = SessionState::default();
    assert!(state.loading);
    state.set_profile(user("abc", "Joe", "joe@x.com"));
    assert!(!state.loading);
    assert!(state.signed());
    assert_eq!(state.user.as_ref().map(|u| u.name.as_str()), Some("Joe"));
}

#[test]
fn later_notification_overwrites_without_reconciliation() {
    let mut state = SessionState::default();
    state.set_profile(user("u1", "Ann", "a@x.com"));
    // A follow-up notification for the same uid may carry a stale name;
    // the store adopts it as-is.
    state.resolve(Some(user("u1", "", "a@x.com")));
    assert_eq!(state.user.as_ref().map(|u| u.name.as_str()), Some(""));
}

#[test]
fn clear_signs_out() {
    let mut state = SessionState::default();
    state.resolve(Some(user("u1", "Ann", "a@x.com")));
    state.clear();
    assert!(!state.signed());
    assert!(!state.loading);
    assert_eq!(state.user, None);
}
