//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! A single `RwSignal<SessionState>` is provided via context at the
//! application root and is the only source of truth for authentication
//! status. Route guards and user-aware components read it; the app root and
//! the login/register flows are the only writers.
//!
//! DESIGN
//! ======
//! `loading` starts `true` and drops to `false` on the first session
//! resolution, never to rise again; "signed in" is not stored but derived
//! from `user`, so the two can never disagree.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;

/// Authentication state: the resolved profile plus the initial-load flag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    /// Profile of the signed-in user, `None` when signed out.
    pub user: Option<User>,
    /// `true` only before the first resolution from the server.
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl SessionState {
    /// Whether a user is signed in. Always exactly `user.is_some()`.
    #[must_use]
    pub fn signed(&self) -> bool {
        self.user.is_some()
    }

    /// Apply a session notification from the server: a profile on sign-in,
    /// `None` on sign-out or when the initial load finds no session.
    pub fn resolve(&mut self, user: Option<User>) {
        self.user = user;
        self.loading = false;
    }

    /// Overwrite the profile directly, without waiting for a server round
    /// trip. Used right after registration, where the display name is known
    /// locally before the server would echo it back.
    pub fn set_profile(&mut self, user: User) {
        self.user = Some(user);
        self.loading = false;
    }

    /// Drop the profile after an explicit sign-out.
    pub fn clear(&mut self) {
        self.resolve(None);
    }
}
