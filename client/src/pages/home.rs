//! Home page — the public listing feed with name search.

use leptos::prelude::*;

use crate::components::car_card::CarCard;
use crate::components::site_header::SiteHeader;
use crate::net::types::CarSummary;

#[component]
pub fn HomePage() -> impl IntoView {
    let search = RwSignal::new(String::new());
    let cars = RwSignal::new(Vec::<CarSummary>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    let load = move |term: String| {
        loading.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_cars(&term).await {
                Ok(items) => {
                    cars.set(items);
                    error.set(None);
                }
                Err(e) => error.set(Some(e)),
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = term;
    };

    #[cfg(feature = "hydrate")]
    load(String::new());

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        load(search.get());
    };

    view! {
        <div class="home-page">
            <SiteHeader/>
            <form class="search-bar" on:submit=on_search>
                <input
                    class="search-bar__input"
                    type="text"
                    placeholder="Search by car name..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <button class="search-bar__submit" type="submit">
                    "Search"
                </button>
            </form>
            <h1 class="home-page__tagline">"New and used cars across Brazil"</h1>

            <Show when=move || error.get().is_some()>
                <p class="home-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || !loading.get() fallback=move || view! { <p class="home-page__status">"Loading listings..."</p> }>
                <Show when=move || !cars.get().is_empty() fallback=move || view! { <p class="home-page__status">"No listings found."</p> }>
                    <main class="card-grid">
                        {move || {
                            cars.get()
                                .into_iter()
                                .map(|car| view! { <CarCard car=car/> })
                                .collect::<Vec<_>>()
                        }}
                    </main>
                </Show>
            </Show>
        </div>
    }
}
