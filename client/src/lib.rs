//! # careerconnect-web
//!
//! Leptos single-page client for the CareerConnect job portal.
//!
//! This crate wires the `careerconnect` session core into reactive context:
//! it resolves the session at mount, renders guarded routes and the header
//! navigation, and hosts the sign-in and sign-up forms. Browser
//! implementations of the core's transport, storage and timer seams live in
//! `net` and `util`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install console logging and mount the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("console logging unavailable: {e}").into());
    }
    leptos::mount::mount_to_body(app::App);
}
