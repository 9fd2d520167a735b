//! # rentify
//!
//! Leptos + WASM client for the Rentify rental and sale marketplace.
//!
//! This crate contains pages, components, application state, and the typed
//! REST client. Everything outside `pages`/`components` is plain Rust and is
//! tested natively against an in-memory transport and storage.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and the panic hook, then mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
