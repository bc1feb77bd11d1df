//! # dashboard
//!
//! Leptos + WASM frontend for the fact-verification admin and member
//! dashboard.
//!
//! This crate contains the session store, the route guard that picks the
//! admin or member layout, the REST client for the external verification
//! API, and one page per screen. It is compiled twice: with `ssr` for the
//! server render and with `hydrate` for the browser bundle.

#![recursion_limit = "256"]

pub mod app;
pub mod config;
pub mod net;
pub mod pages;
pub mod routing;
pub mod state;
pub mod util;

/// Browser entry point: attach to the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // A second init (hot reload) fails harmlessly.
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("hydrating dashboard against {}", config::ApiConfig::from_build_env().base_url());
    leptos::mount::hydrate_body(app::App);
}
