//! Public site header shown on browse and detail pages.

use leptos::prelude::*;

use crate::state::session::SessionState;

/// Top bar with the logo and a session-aware account link.
#[component]
pub fn SiteHeader() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <header class="site-header">
            <div class="site-header__inner">
                <a class="site-header__logo" href="/">
                    "Carango"
                </a>
                <Show when=move || !session.get().loading>
                    {move || {
                        if session.get().signed() {
                            view! {
                                <a class="site-header__account" href="/dashboard" title="My dashboard">
                                    "Dashboard"
                                </a>
                            }
                            .into_any()
                        } else {
                            view! {
                                <a class="site-header__account" href="/login" title="Sign in">
                                    "Sign in"
                                </a>
                            }
                            .into_any()
                        }
                    }}
                </Show>
            </div>
        </header>
    }
}
