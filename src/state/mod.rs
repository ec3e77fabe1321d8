//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `generation`, `ui`) so screens can
//! depend on small focused models, and the async flows take their HTTP
//! capability as a parameter instead of reaching for globals.

pub mod auth;
pub mod generation;
pub mod ui;
