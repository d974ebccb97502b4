//! Carango browser client.
//!
//! ARCHITECTURE
//! ============
//! `app` wires the router and the shared session store; `pages` own
//! route-level orchestration; `net` talks REST to the server; `state` holds
//! context-provided stores; `util` keeps pure helpers testable off-browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
