//! Seller panel navigation bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shared by the dashboard and new-listing pages. Logout clears the session
//! store before leaving the panel so guards see the transition immediately.

use leptos::prelude::*;

use crate::state::session::SessionState;

/// Panel nav with links to the seller routes and a logout action.
#[component]
pub fn DashboardHeader() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                crate::net::api::logout().await;
                session.update(SessionState::clear);
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href("/login");
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = session;
    };

    view! {
        <nav class="panel-header">
            <a class="panel-header__link" href="/dashboard">
                "Dashboard"
            </a>
            <a class="panel-header__link" href="/dashboard/new">
                "New listing"
            </a>
            <span class="panel-header__spacer"></span>
            <button class="panel-header__logout" on:click=on_logout>
                "Logout"
            </button>
        </nav>
    }
}
