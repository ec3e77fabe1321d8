//! Page modules for screen-level views.
//!
//! ARCHITECTURE
//! ============
//! Each page owns screen-scoped orchestration and delegates rendering
//! details to subcomponents such as the prompt bar.

pub mod dashboard;
pub(crate) mod dashboard_prompt_bar;
pub mod login;
