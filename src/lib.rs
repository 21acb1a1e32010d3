//! # followup-dashboard
//!
//! Leptos + WASM dashboard for the hospital patient follow-up service.
//!
//! This crate contains the route pages, the patient and questions components,
//! the browser session store, the session guard, and the token-aware REST
//! client used to talk to the follow-up backend. The `server` package renders
//! the shell over SSR and ships this crate to the browser with the `hydrate`
//! feature.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point invoked by the generated WASM bootstrap.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
