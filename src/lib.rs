//! # recovery-client
//!
//! Leptos + WASM frontend for the password-recovery pages: requesting a
//! reset e-mail and setting a new password from a reset link.
//!
//! The form behaviour lives in `recovery` as plain Rust driven through
//! injected capabilities (API, notifier, navigator), so it runs and is
//! tested natively. `pages` wire those flows to the browser: toasts in
//! `state`, HTTP in `net`, routing via `leptos_router`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod recovery;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered `App`.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
    leptos::mount::hydrate_body(app::App);
}
