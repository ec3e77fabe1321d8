//! # vizboard
//!
//! Leptos + WASM frontend for the data-platform dashboard. Replaces the
//! React `frontend/` with a Rust-native UI layer.
//!
//! This crate contains pages, application state, runtime configuration,
//! and the HTTP layer that talks to the chart-generation backend. The app
//! renders a login screen, then a dashboard that embeds generated Superset
//! charts and forwards free-text prompts to the backend.

pub mod app;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
