//! # keystone-ui
//!
//! Leptos + WASM frontend for the Keystone web client.
//!
//! This crate contains the document shell and root layout, the page routes,
//! the token-gated async hooks that authorized pages fetch through, and the
//! token/GraphQL network helpers behind them.

pub mod app;
pub mod components;
pub mod font;
pub mod hooks;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already initialized");
    }
    leptos::mount::hydrate_body(app::App);
}
