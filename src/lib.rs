//! # activity-client
//!
//! Leptos + WASM frontend for the activities web application.
//!
//! This crate contains pages (landing/waitlist, login, register, pending
//! inputs), components, application state, and the network layer: REST
//! helpers plus bindings to the identity provider SDK loaded by the host
//! page.

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
    leptos::mount::hydrate_body(crate::app::App);
}
