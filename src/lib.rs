//! # stockdesk-client
//!
//! Leptos + WASM frontend for the Stockdesk trading application.
//! Replaces the React `frontend/` with a Rust-native UI layer.
//!
//! This crate contains the authentication pages, the session store
//! backed by `localStorage`, the auth API client, and the routing that
//! gates the protected market view on session presence.
//!
//! Browser-only code is gated behind the `csr` feature so the default
//! (native) build compiles the pure logic and its tests.

pub mod app;
pub mod config;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;

/// WASM entry point: install panic reporting and console logging, then
/// mount the application to the document body.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(crate::app::App);
}
