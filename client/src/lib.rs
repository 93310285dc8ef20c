//! # client
//!
//! Leptos + WASM host for the depth-chart field.
//!
//! This crate contains the root app, the components that host the `field`
//! engine on a canvas and render the card grid and sections list, and the
//! caller-side selection state the field reports clicks into.

pub mod app;
pub mod components;
pub mod state;
pub mod util;

/// Browser entry point: install the panic hook and logger, then mount the
/// app with the roster embedded in the page. The page is static, so the app
/// renders client-side into `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use leptos::prelude::*;

    use crate::app::App;

    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("depth chart: logger unavailable: {err}").into());
    }

    let roster = util::roster_data::read_embedded();
    leptos::mount::mount_to_body(move || view! { <App roster=roster.clone()/> });
}
