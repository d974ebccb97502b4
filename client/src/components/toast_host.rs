//! Toast rendering and the fire-and-forget notification helper.

use leptos::prelude::*;

use crate::state::ui::{ToastKind, UiState};

#[cfg(feature = "hydrate")]
const TOAST_DISMISS_SECS: u64 = 4;

/// Push a toast and schedule its dismissal.
pub fn show_toast(ui: RwSignal<UiState>, kind: ToastKind, message: impl Into<String>) {
    let mut toast_id = 0;
    ui.update(|state| toast_id = state.push_toast(kind, message));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_secs(TOAST_DISMISS_SECS)).await;
        ui.update(|state| state.dismiss_toast(toast_id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = toast_id;
}

/// Fixed overlay rendering the current toast queue.
#[component]
pub fn ToastHost() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="toast-host">
            {move || {
                ui.get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let class = match toast.kind {
                            ToastKind::Success => "toast toast--success",
                            ToastKind::Error => "toast toast--error",
                        };
                        let toast_id = toast.id;
                        view! {
                            <div class=class on:click=move |_| ui.update(|state| state.dismiss_toast(toast_id))>
                                {toast.message}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
