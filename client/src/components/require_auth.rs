//! Children-passthrough wrapper for protected routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Placed around the dashboard routes in `app`. Renders a placeholder while
//! the session is still resolving, the children once signed in, and a
//! redirect to the login page otherwise. The decision itself lives in
//! `util::guard` so it stays a pure function of session state.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::state::session::SessionState;
use crate::util::guard::{GuardOutcome, guard_outcome};

/// Guard wrapper: renders its children only for a signed-in session.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        {move || match guard_outcome(&session.get()) {
            GuardOutcome::Pending => view! {
                <div class="guard-placeholder">
                    <p>"Loading..."</p>
                </div>
            }
            .into_any(),
            GuardOutcome::Authorized => children().into_any(),
            GuardOutcome::Unauthorized => view! { <Redirect path="/login"/> }.into_any(),
        }}
    }
}
