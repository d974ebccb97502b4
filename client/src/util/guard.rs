//! Route-guard decision logic.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes must apply identical pending/redirect behavior, so the
//! decision is a pure function of session state and the wrapper component
//! in `components::require_auth` just renders whatever it says.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::state::session::SessionState;

/// What a protected route should render for the current session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Session resolution still pending: show a placeholder.
    Pending,
    /// Signed in: render the protected children unchanged.
    Authorized,
    /// No session: redirect to the login page.
    Unauthorized,
}

/// Evaluate the guard for one render. Re-run on every session transition.
#[must_use]
pub fn guard_outcome(state: &SessionState) -> GuardOutcome {
    if state.loading {
        GuardOutcome::Pending
    } else if state.signed() {
        GuardOutcome::Authorized
    } else {
        GuardOutcome::Unauthorized
    }
}
