//! Registration page.
//!
//! SYSTEM CONTEXT
//! ==============
//! On success the session store is hydrated directly with the form's name
//! and email instead of waiting for a server round trip, so the dashboard
//! greets the new seller by name immediately.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::toast_host::show_toast;
use crate::net::types::User;
use crate::state::session::SessionState;
use crate::state::ui::{ToastKind, UiState};
use crate::util::validate::{validate_email, validate_name, validate_password};

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

pub(crate) struct RegisterFieldErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl RegisterFieldErrors {
    pub(crate) fn any(&self) -> bool {
        self.name.is_some() || self.email.is_some() || self.password.is_some()
    }
}

pub(crate) fn register_field_errors(name: &str, email: &str, password: &str) -> RegisterFieldErrors {
    RegisterFieldErrors {
        name: validate_name(name),
        email: validate_email(email),
        password: validate_password(password),
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let name_error = RwSignal::new(None::<&'static str>);
    let email_error = RwSignal::new(None::<&'static str>);
    let password_error = RwSignal::new(None::<&'static str>);
    let busy = RwSignal::new(false);

    // Same as the login page: the form always starts signed out.
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
        let errors = register_field_errors(&name.get(), &email.get(), &password.get());
        name_error.set(errors.name);
        email_error.set(errors.email);
        password_error.set(errors.password);
        if errors.any() {
            return;
        }
        busy.set(true);

        let name_value = name.get().trim().to_owned();
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        let navigate = navigate.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::register(&name_value, &email_value, &password_value).await {
                Ok(created) => {
                    // Hydrate the profile from the form: the display name is
                    // already known here, no notification needed.
                    session.update(|state| {
                        state.set_profile(User {
                            id: created.id,
                            name: name_value,
                            email: email_value,
                        });
                    });
                    show_toast(ui, ToastKind::Success, "Account created.");
                    let mut options = NavigateOptions::default();
                    options.replace = true;
                    navigate("/dashboard", options);
                }
                Err(_) => {
                    show_toast(ui, ToastKind::Error, "Could not create the account.");
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (name_value, email_value, password_value, navigate, ui);
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
                        type="text"
                        placeholder="Your full name..."
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <Show when=move || name_error.get().is_some()>
                        <p class="auth-form__error">{move || name_error.get().unwrap_or_default()}</p>
                    </Show>
                </label>
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
                    "Register"
                </button>
            </form>
            <a class="auth-page__switch" href="/login">
                "Already have an account? Sign in!"
            </a>
        </div>
    }
}
