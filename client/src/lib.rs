//! # client
//!
//! Leptos + WASM frontend for the sales dashboard.
//!
//! The core is the session layer: `net` wraps the backend auth and dashboard
//! endpoints behind a `Transport` seam with response interceptors, `state`
//! holds the route guard and fetch state machines, and `util::validation`
//! checks forms before anything reaches the network. `pages` and
//! `components` render on top of it.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs logging and hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
