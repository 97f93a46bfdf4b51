//! Shared Dioxus components and D3.js bridge for the evaporation dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for D3.js chart functions via `js_sys::eval()`
//! - `state`: `AppState`, the Dioxus signal holding the `SessionState`
//! - `components`: RSX components for the form, results and chart cards

pub mod js_bridge;
pub mod state;
pub mod components;
