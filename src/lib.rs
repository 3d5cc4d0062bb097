//! # loja-ui
//!
//! Leptos + WASM frontend for a small business-management application:
//! authentication, a dashboard, and list screens for products, categories,
//! and clients.
//!
//! This crate contains pages, components, the session manager that owns
//! persisted credentials, the authorized API client, and the navigation
//! guard. Browser-only code is gated behind the `csr` feature so the rest
//! of the crate builds and tests natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
pub mod session;
pub mod util;

/// WASM entry point: installs panic/log hooks and mounts the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
