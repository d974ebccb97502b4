//! Reusable card for listing feeds.
//!
//! DESIGN
//! ======
//! Keeps listing presentation consistent between the home feed and the
//! seller dashboard; the delete affordance only appears when the parent
//! supplies a callback.

use leptos::prelude::*;

use crate::net::types::CarSummary;
use crate::util::format::{price_tag, year_km_line};

/// A clickable card representing one listing.
#[component]
pub fn CarCard(car: CarSummary, #[prop(optional)] on_delete: Option<Callback<String>>) -> impl IntoView {
    let href = format!("/car/{}", car.id);
    let car_id = car.id.clone();
    let cover = car.cover_url.clone();

    view! {
        <section class="car-card">
            {on_delete.map(|on_delete| {
                view! {
                    <button
                        class="car-card__delete"
                        on:click=move |_| on_delete.run(car_id.clone())
                        title="Delete listing"
                        aria-label="Delete listing"
                    >
                        "✕"
                    </button>
                }
            })}
            <a href=href>
                {match cover {
                    Some(url) => view! { <img class="car-card__photo" src=url alt="listing photo"/> }.into_any(),
                    None => view! { <div class="car-card__photo car-card__photo--empty">"No photo"</div> }.into_any(),
                }}
                <p class="car-card__name">{car.name.clone()}</p>
                <div class="car-card__meta">
                    <span>{year_km_line(&car.year, &car.km)}</span>
                    <strong>{price_tag(&car.price)}</strong>
                    <div class="car-card__divider"></div>
                    <span>{car.city.clone()}</span>
                </div>
            </a>
        </section>
    }
}
