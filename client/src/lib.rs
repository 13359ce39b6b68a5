//! # client
//!
//! Leptos + WASM single-page front end for the Daily Work Tracker.
//!
//! Session rules (storage, guard decisions, navigation links, form
//! validation) live in the `tracker` crate; this crate binds them to
//! signals, routes and `localStorage`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: mount the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
