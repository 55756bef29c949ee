//! # mystig-client
//!
//! Leptos + WASM frontend for MystigTravel: the public marketing site and the
//! seller dashboard of a Morocco-focused travel marketplace.
//!
//! The crate talks to the backend REST API through a single HTTP choke point
//! (`net::http`) that owns the bearer-token refresh protocol; `auth` holds
//! token persistence and the session service, `state` the shared reactive
//! auth context, and `pages`/`components` the UI tree.

pub mod app;
pub mod auth;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// Browser entrypoint: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    leptos::mount::hydrate_body(App);
}
