//! Browser-side feature annotation viewer.
//!
//! ARCHITECTURE
//! ============
//! A client-rendered Leptos app mounted into the genome portal's feature
//! page. Annotation cards fetch their data lazily from the portal's REST
//! API the first time they are opened; the top bar search drives site
//! navigation through the portal's regular URLs.
//!
//! Layers:
//! - `net`: REST endpoints, payload types, and fetch errors.
//! - `state`: the per-card lifecycle state machine.
//! - `components`: annotation cards, search box, top bar.
//! - `pages`: route-level screens.
//! - `util`: link builders and host page helpers.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install the panic hook and console logger, then
/// mount the app onto the host page.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(crate::app::App);
}
