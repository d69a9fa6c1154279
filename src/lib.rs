//! # foodgram-ui
//!
//! Leptos + WASM frontend for the Foodgram recipe-sharing application's
//! informational pages. Replaces the React `frontend/` pages with a
//! Rust-native UI layer.
//!
//! This crate contains the static About and Technologies pages, the layout
//! primitives they compose, the scoped head-metadata utility, and the
//! logical-to-final style class mapping.

pub mod app;
pub mod components;
pub mod pages;
pub mod styles;

/// WASM entry point for client-side hydration.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
