//! Login page with email + password sign-in.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::toast_host::show_toast;
use crate::state::session::SessionState;
use crate::state::ui::{ToastKind, UiState};
use crate::util::validate::{validate_email, validate_login_password};

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

pub(crate) fn login_field_errors(email: &str, password: &str) -> (Option<&'static str>, Option<&'static str>) {
    (validate_email(email), validate_login_password(password))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let email_error = RwSignal::new(None::<&'static str>);
    let password_error = RwSignal::new(None::<&'static str>);
    let busy = RwSignal::new(false);

    // Opening the login page drops any live session, matching the original
    // flow where the form always starts signed out.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        crate::net::api::logout().await;
        session.update(SessionState::clear);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_err, password_err) = login_field_errors(&email.get(), &password.get());
        email_error.set(email_err);
        password_error.set(password_err);
        if email_err.is_some() || password_err.is_some() {
            return;
        }
        busy.set(true);

        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        let navigate = navigate.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&email_value, &password_value).await {
                Ok(user) => {
                    session.update(|state| state.resolve(Some(user)));
                    show_toast(ui, ToastKind::Success, "Signed in.");
                    let mut options = NavigateOptions::default();
                    options.replace = true;
                    navigate("/dashboard", options);
                }
                Err(_) => {
                    show_toast(ui, ToastKind::Error, "Could not sign in.");
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value, navigate, ui);
        }
    };

    view! {
        <div class="auth-page">
            <a class="auth-page__logo" href="/">
                "Carango"
            </a>
            <form class="auth-form" on:submit=on_submit>
                <label class="auth-form__field">
                    <input
                        class="auth-form__input"
                        type="email"
                        placeholder="Your email..."
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <Show when=move || email_error.get().is_some()>
                        <p class="auth-form__error">{move || email_error.get().unwrap_or_default()}</p>
                    </Show>
                </label>
                <label class="auth-form__field">
                    <input
                        class="auth-form__input"
                        type="password"
                        placeholder="Your password..."
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <Show when=move || password_error.get().is_some()>
                        <p class="auth-form__error">{move || password_error.get().unwrap_or_default()}</p>
                    </Show>
                </label>
                <button class="auth-form__submit" type="submit" disabled=move || busy.get()>
                    "Sign in"
                </button>
            </form>
            <a class="auth-page__switch" href="/register">
                "No account yet? Register!"
            </a>
        </div>
    }
}
