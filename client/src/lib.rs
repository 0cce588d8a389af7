//! # client
//!
//! Leptos + WASM frontend for the Campus Finder university directory.
//!
//! This crate contains pages, components, reactive application state, and
//! the one-shot dataset fetch. All catalog logic (filters, sorting,
//! selections) lives in the `catalog` crate; this crate only wires it to
//! signals and renders it.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
