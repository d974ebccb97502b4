//! New listing page — photo uploads plus the listing form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Photos are uploaded as they are picked and referenced by id at submit
//! time, so an abandoned form can still drop its uploads one by one.

use leptos::prelude::*;

use crate::components::dashboard_header::DashboardHeader;
use crate::components::toast_host::show_toast;
use crate::net::api::NewListing;
use crate::net::types::CarImage;
use crate::state::ui::{ToastKind, UiState};
use crate::util::validate::{validate_required, validate_whatsapp};

#[cfg(test)]
#[path = "new_car_test.rs"]
mod new_car_test;

/// Photo formats accepted for listings.
pub(crate) fn is_supported_image(content_type: &str) -> bool {
    matches!(content_type, "image/jpeg" | "image/png")
}

pub(crate) struct ListingFieldErrors {
    pub name: Option<&'static str>,
    pub model: Option<&'static str>,
    pub year: Option<&'static str>,
    pub km: Option<&'static str>,
    pub price: Option<&'static str>,
    pub city: Option<&'static str>,
    pub whatsapp: Option<&'static str>,
    pub description: Option<&'static str>,
}

impl ListingFieldErrors {
    pub(crate) fn any(&self) -> bool {
        [
            self.name,
            self.model,
            self.year,
            self.km,
            self.price,
            self.city,
            self.whatsapp,
            self.description,
        ]
        .iter()
        .any(Option::is_some)
    }
}

pub(crate) fn listing_field_errors(listing: &NewListing) -> ListingFieldErrors {
    ListingFieldErrors {
        name: validate_required(&listing.name),
        model: validate_required(&listing.model),
        year: validate_required(&listing.year),
        km: validate_required(&listing.km),
        price: validate_required(&listing.price),
        city: validate_required(&listing.city),
        whatsapp: validate_whatsapp(&listing.whatsapp),
        description: validate_required(&listing.description),
    }
}

#[component]
pub fn NewCarPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let photos = RwSignal::new(Vec::<CarImage>::new());
    let name = RwSignal::new(String::new());
    let model = RwSignal::new(String::new());
    let year = RwSignal::new(String::new());
    let km = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let city = RwSignal::new(String::new());
    let whatsapp = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());

    let name_error = RwSignal::new(None::<&'static str>);
    let model_error = RwSignal::new(None::<&'static str>);
    let year_error = RwSignal::new(None::<&'static str>);
    let km_error = RwSignal::new(None::<&'static str>);
    let price_error = RwSignal::new(None::<&'static str>);
    let city_error = RwSignal::new(None::<&'static str>);
    let whatsapp_error = RwSignal::new(None::<&'static str>);
    let description_error = RwSignal::new(None::<&'static str>);
    let busy = RwSignal::new(false);

    let on_file = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast as _;

            let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            input.set_value("");

            if !is_supported_image(&file.type_()) {
                show_toast(ui, ToastKind::Error, "Send a jpeg or png image!");
                return;
            }

            leptos::task::spawn_local(async move {
                match crate::net::api::upload_photo(&file).await {
                    Ok(image) => {
                        photos.update(|items| items.push(image));
                        show_toast(ui, ToastKind::Success, "Photo uploaded.");
                    }
                    Err(_) => show_toast(ui, ToastKind::Error, "Could not upload the photo."),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let on_remove_photo = Callback::new(move |image_id: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_photo(&image_id).await {
                Ok(()) => photos.update(|items| items.retain(|image| image.id != image_id)),
                Err(_) => show_toast(ui, ToastKind::Error, "Could not remove the photo."),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = image_id;
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }

        let listing = NewListing {
            name: name.get().trim().to_owned(),
            model: model.get().trim().to_owned(),
            year: year.get().trim().to_owned(),
            km: km.get().trim().to_owned(),
            price: price.get().trim().to_owned(),
            city: city.get().trim().to_owned(),
            whatsapp: whatsapp.get().trim().to_owned(),
            description: description.get().trim().to_owned(),
            image_ids: photos.get().into_iter().map(|image| image.id).collect(),
        };

        let errors = listing_field_errors(&listing);
        name_error.set(errors.name);
        model_error.set(errors.model);
        year_error.set(errors.year);
        km_error.set(errors.km);
        price_error.set(errors.price);
        city_error.set(errors.city);
        whatsapp_error.set(errors.whatsapp);
        description_error.set(errors.description);
        if errors.any() {
            return;
        }
        if listing.image_ids.is_empty() {
            show_toast(ui, ToastKind::Error, "Send at least one photo!");
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_car(&listing).await {
                Ok(_) => {
                    photos.set(Vec::new());
                    for field in [name, model, year, km, price, city, whatsapp, description] {
                        field.set(String::new());
                    }
                    show_toast(ui, ToastKind::Success, "Listing created.");
                }
                Err(_) => show_toast(ui, ToastKind::Error, "Could not create the listing."),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = listing;
    };

    let text_field = move |label: &'static str,
                           placeholder: &'static str,
                           value: RwSignal<String>,
                           error: RwSignal<Option<&'static str>>| {
        view! {
            <div class="listing-form__field">
                <p class="listing-form__label">{label}</p>
                <input
                    class="listing-form__input"
                    type="text"
                    placeholder=placeholder
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
                <Show when=move || error.get().is_some()>
                    <p class="listing-form__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
            </div>
        }
    };

    view! {
        <div class="new-car-page">
            <DashboardHeader/>

            <div class="photo-strip">
                <label class="photo-strip__picker">
                    <span>"+ Photo"</span>
                    <input type="file" accept="image/*" class="photo-strip__input" on:change=on_file/>
                </label>
                {move || {
                    photos
                        .get()
                        .into_iter()
                        .map(|image| {
                            let image_id = image.id.clone();
                            view! {
                                <div class="photo-strip__item">
                                    <button
                                        class="photo-strip__remove"
                                        on:click=move |_| on_remove_photo.run(image_id.clone())
                                        aria-label="Remove photo"
                                    >
                                        "✕"
                                    </button>
                                    <img class="photo-strip__preview" src=image.url alt="listing photo"/>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>

            <form class="listing-form" on:submit=on_submit>
                {text_field("Car name", "E.g. Onix 1.0...", name, name_error)}
                {text_field("Model", "E.g. 1.0 flex manual", model, model_error)}
                <div class="listing-form__row">
                    {text_field("Year", "E.g. 2016", year, year_error)}
                    {text_field("Mileage", "E.g. 180.000", km, km_error)}
                </div>
                <div class="listing-form__row">
                    {text_field("Phone / WhatsApp", "E.g. 48999850058", whatsapp, whatsapp_error)}
                    {text_field("City", "E.g. Palhoça - SC", city, city_error)}
                </div>
                {text_field("Price", "E.g. 69.000", price, price_error)}
                <div class="listing-form__field">
                    <p class="listing-form__label">"Description"</p>
                    <textarea
                        class="listing-form__textarea"
                        placeholder="Describe the car in detail"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                    <Show when=move || description_error.get().is_some()>
                        <p class="listing-form__error">{move || description_error.get().unwrap_or_default()}</p>
                    </Show>
                </div>
                <button class="listing-form__submit" type="submit" disabled=move || busy.get()>
                    "Create listing"
                </button>
            </form>
        </div>
    }
}
