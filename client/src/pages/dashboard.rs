//! Dashboard page listing the seller's own cars with delete actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route, mounted behind `RequireAuth`.

use leptos::prelude::*;

use crate::components::car_card::CarCard;
use crate::components::dashboard_header::DashboardHeader;
use crate::components::toast_host::show_toast;
use crate::net::types::CarSummary;
use crate::state::ui::{ToastKind, UiState};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let cars = RwSignal::new(Vec::<CarSummary>::new());
    let loading = RwSignal::new(true);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_my_cars().await {
            Ok(items) => cars.set(items),
            Err(_) => show_toast(ui, ToastKind::Error, "Could not load your listings."),
        }
        loading.set(false);
    });

    let on_delete = Callback::new(move |car_id: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_car(&car_id).await {
                Ok(()) => {
                    cars.update(|items| items.retain(|car| car.id != car_id));
                    show_toast(ui, ToastKind::Success, "Listing deleted.");
                }
                Err(_) => show_toast(ui, ToastKind::Error, "Could not delete the listing."),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = car_id;
    });

    view! {
        <div class="dashboard-page">
            <DashboardHeader/>
            <Show when=move || !loading.get() fallback=move || view! { <p class="dashboard-page__status">"Loading your listings..."</p> }>
                <Show
                    when=move || !cars.get().is_empty()
                    fallback=move || view! { <p class="dashboard-page__status">"You have no listings yet."</p> }
                >
                    <main class="card-grid">
                        {move || {
                            cars.get()
                                .into_iter()
                                .map(|car| view! { <CarCard car=car on_delete=on_delete/> })
                                .collect::<Vec<_>>()
                        }}
                    </main>
                </Show>
            </Show>
        </div>
    }
}
