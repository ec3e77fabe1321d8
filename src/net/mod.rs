//! Networking modules for the backend HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` defines the transport capability and its browser implementation,
//! `types` defines the shared wire schema, and `api` maps endpoints onto
//! typed calls.

pub mod api;
pub mod http;
pub mod types;
