//! # client
//!
//! Leptos + WASM frontend for the media download page.
//!
//! This crate contains the page, its components, the page state models, the
//! `/download` API call, and small browser helpers (theme storage, clipboard,
//! timers). Built with `hydrate` for the browser and `ssr` for the server.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
