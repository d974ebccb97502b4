//! Minimal photo slider for the listing detail page.

use leptos::prelude::*;

use crate::net::types::CarImage;

/// One-at-a-time slider with previous/next controls.
#[component]
pub fn ImageSlider(images: Vec<CarImage>) -> impl IntoView {
    let count = images.len();
    let index = RwSignal::new(0usize);

    let current = {
        let images = images.clone();
        move || images.get(index.get()).cloned()
    };

    let on_prev = move |_| index.update(|i| *i = if *i == 0 { count.saturating_sub(1) } else { *i - 1 });
    let on_next = move |_| index.update(|i| *i = if *i + 1 >= count { 0 } else { *i + 1 });

    view! {
        <div class="slider">
            {move || {
                current()
                    .map(|image| view! { <img class="slider__photo" src=image.url alt="listing photo"/> })
            }}
            <Show when=move || count > 1>
                <button class="slider__control slider__control--prev" on:click=on_prev aria-label="Previous photo">
                    "‹"
                </button>
                <button class="slider__control slider__control--next" on:click=on_next aria-label="Next photo">
                    "›"
                </button>
                <div class="slider__dots">
                    {(0..count)
                        .map(|dot| {
                            view! {
                                <button
                                    class="slider__dot"
                                    class:slider__dot--active=move || index.get() == dot
                                    on:click=move |_| index.set(dot)
                                    aria-label=format!("Photo {}", dot + 1)
                                ></button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </Show>
        </div>
    }
}
