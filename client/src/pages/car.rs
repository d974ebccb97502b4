//! Listing detail page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Public route keyed by the listing id; an unknown id navigates back to
//! the home feed instead of rendering an empty shell.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::image_slider::ImageSlider;
use crate::components::site_header::SiteHeader;
use crate::net::types::Car;
use crate::util::format::{price_tag, whatsapp_link};

#[component]
pub fn CarDetailPage() -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();

    let car = RwSignal::new(None::<Car>);
    let requested = RwSignal::new(false);

    Effect::new(move || {
        if requested.get() {
            return;
        }
        let Some(car_id) = params.read().get("id") else {
            return;
        };
        requested.set(true);

        let navigate = navigate.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_car(&car_id).await {
                Ok(Some(found)) => car.set(Some(found)),
                // Unknown id or fetch failure: back to the feed.
                Ok(None) | Err(_) => navigate("/", NavigateOptions::default()),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (car_id, navigate);
    });

    view! {
        <div class="car-page">
            <SiteHeader/>
            {move || {
                car.get()
                    .map(|car| {
                        let contact_href = whatsapp_link(&car.whatsapp, &car.name);
                        view! {
                            <ImageSlider images=car.images.clone()/>
                            <main class="car-page__body">
                                <div class="car-page__headline">
                                    <h1>{car.name.clone()}</h1>
                                    <h1>{price_tag(&car.price)}</h1>
                                </div>
                                <p class="car-page__model">{car.model.clone()}</p>
                                <div class="car-page__facts">
                                    <div>
                                        <p>"City"</p>
                                        <strong>{car.city.clone()}</strong>
                                    </div>
                                    <div>
                                        <p>"Year"</p>
                                        <strong>{car.year.clone()}</strong>
                                    </div>
                                    <div>
                                        <p>"Mileage"</p>
                                        <strong>{format!("{} km", car.km)}</strong>
                                    </div>
                                </div>
                                <strong>"Description:"</strong>
                                <p class="car-page__description">{car.description.clone()}</p>
                                <strong>"Phone / WhatsApp"</strong>
                                <p>{car.whatsapp.clone()}</p>
                                <a class="car-page__contact" href=contact_href target="_blank" rel="noreferrer">
                                    "Talk to the seller"
                                </a>
                            </main>
                        }
                    })
            }}
        </div>
    }
}
