use super::*;
use crate::net::types::User;

fn signed_in() -> SessionState {
    SessionState {
        user: Some(User { id: "u1".to_owned(), name: "Ann".to_owned(), email: "a@x.com".to_owned() }),
        loading: false,
    }
}

#[test]
fn pending_while_loading() {
    let state = SessionState::default();
    assert_eq!(guard_outcome(&state), GuardOutcome::Pending);
}

#[test]
fn pending_wins_even_with_a_user_present() {
    // loading=true only ever precedes the first notification, but the
    // branch order must still favor the placeholder.
    let mut state = signed_in();
    state.loading = true;
    assert_eq!(guard_outcome(&state), GuardOutcome::Pending);
}

#[test]
fn authorized_when_signed() {
    assert_eq!(guard_outcome(&signed_in()), GuardOutcome::Authorized);
}

#[test]
fn unauthorized_redirects_when_resolved_without_user() {
    let state = SessionState { user: None, loading: false };
    assert_eq!(guard_outcome(&state), GuardOutcome::Unauthorized);
}

#[test]
fn cold_load_without_session_ends_unauthorized() {
    // App loads with no prior session: pending, then a null notification.
    let mut state = SessionState::default();
    assert_eq!(guard_outcome(&state), GuardOutcome::Pending);
    state.resolve(None);
    assert_eq!(guard_outcome(&state), GuardOutcome::Unauthorized);
}

#[test]
fn registration_mutator_authorizes_without_a_notification() {
    let mut state = SessionState::default();
    state.set_profile(User { id: "abc".to_owned(), name: "Joe".to_owned(), email: "joe@x.com".to_owned() });
    assert_eq!(guard_outcome(&state), GuardOutcome::Authorized);
}
