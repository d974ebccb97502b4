//! Application root: session store provisioning, routing, and the SSR shell.
//!
//! ARCHITECTURE
//! ============
//! The session and toast stores are created exactly once here and handed to
//! every consumer through context, so there is a single source of truth and
//! no hidden globals. The app-start fetch below is the sole initial session
//! resolution; login, register, and logout push later transitions into the
//! same store, and subscribers react through the signal graph.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::require_auth::RequireAuth;
use crate::components::toast_host::ToastHost;
use crate::pages::car::CarDetailPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::new_car::NewCarPage;
use crate::pages::register::RegisterPage;
use crate::state::session::SessionState;
use crate::state::ui::UiState;

/// HTML document shell used by the server renderer.
#[cfg(feature = "ssr")]
pub fn shell(options: LeptosOptions) -> impl IntoView {
    use leptos::hydration::{AutoReload, HydrationScripts};

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    provide_context(session);
    let ui = RwSignal::new(UiState::default());
    provide_context(ui);

    // Initial session resolution. Failure is indistinguishable from "no
    // session" on purpose: the worst outcome is a redirect to login.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let user = crate::net::api::fetch_current_user().await;
        session.update(|state| state.resolve(user));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/carango.css"/>
        <Title text="Carango — used cars"/>
        <Router>
            <ToastHost/>
            <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                <Route path=path!("/") view=HomePage/>
                <Route path=path!("/car/:id") view=CarDetailPage/>
                <Route path=path!("/login") view=LoginPage/>
                <Route path=path!("/register") view=RegisterPage/>
                <Route
                    path=path!("/dashboard")
                    view=|| {
                        view! {
                            <RequireAuth>
                                <DashboardPage/>
                            </RequireAuth>
                        }
                    }
                />
                <Route
                    path=path!("/dashboard/new")
                    view=|| {
                        view! {
                            <RequireAuth>
                                <NewCarPage/>
                            </RequireAuth>
                        }
                    }
                />
            </Routes>
        </Router>
    }
}
