//! Dioxus components for the workout history filter bar.
//!
//! This crate provides:
//! - `browser_query`: `QueryParamStore` backed by the page URL via `web_sys`
//! - `filter_bar`: signal-free state behind the filter form
//! - `state`: shared AppState with Dioxus Signals
//! - `components`: the `HomeFilter` form and its widgets

pub mod browser_query;
pub mod components;
pub mod filter_bar;
pub mod state;
