//! # edunexus-client
//!
//! Leptos + WASM frontend for the EduNexus student-analytics dashboard.
//!
//! All analytics (placement prediction, burnout scoring, AI Q&A) run on the
//! backend API. This crate owns the browser side of authentication: the
//! session manager, its persisted bearer token, route guarding, and the
//! screens built on top of it: login, register, the dashboard, and the
//! placement and burnout prediction forms.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install console logging and mount [`app::App`].
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
