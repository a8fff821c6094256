//! # client
//!
//! Leptos + WASM front end for the Ledgerline financial dashboard.
//!
//! This crate contains the API client, session and workspace state, the canvas
//! component registry and renderer, presentational widgets, and the tab views
//! hosted by the docking workspace. Layout bookkeeping lives in the `dock`
//! crate; wire types live in `schema`.

pub mod app;
pub mod canvas;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
pub mod views;

/// WASM entry point: install logging and hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger already installed: {err}");
    }
    leptos::mount::hydrate_body(app::App);
}
