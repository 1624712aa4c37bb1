//! # booking-widget
//!
//! Leptos + WASM appointment-booking widget for server-rendered professional
//! pages. It opens a modal, loads the professional's slots for a date, lets
//! the visitor pick a service and a slot, and posts the booking request.
//!
//! The host page supplies configuration through a `#booking-data` element;
//! see [`config`]. Browser-only code sits behind the `csr` feature, so the
//! state machine, wire types and formatting helpers build and test natively.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod state;
pub mod util;
pub mod widget;

/// WASM entry point: installs the panic hook and initializes the widget.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn mount() {
    console_error_panic_hook::set_once();
    if app::initialize().is_none() {
        leptos::logging::log!("booking widget not started");
    }
}
