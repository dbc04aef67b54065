//! # travelstory-client
//!
//! Leptos + WASM frontend slice for the TravelStory travel-journaling
//! application: the sign-in and sign-up pages, their field validation,
//! the calls to the authentication API, and the shared session state
//! that the rest of the app reads.
//!
//! Network access lives behind the `hydrate` feature so the crate also
//! builds for SSR hosts, where the auth endpoints are meaningless.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
