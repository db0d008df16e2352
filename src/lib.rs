//! # little-lemon-web
//!
//! Leptos + WASM frontend for the Little Lemon restaurant site: home, about,
//! and menu pages plus a two-step reservation wizard with client-side
//! validation. There is no backend — the only stateful logic is the wizard
//! state machine in [`state::booking`].

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: set up panic reporting and console logging, then
/// hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
