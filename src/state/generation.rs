//! Chart-generation flow driven from the prompt bar.
//!
//! DESIGN
//! ======
//! `run_generation` owns the in-flight latch: the guard rejects empty
//! prompts and re-entry while a request is running, and every exit path
//! resolves the status so the latch cannot stick.

#[cfg(test)]
#[path = "generation_test.rs"]
mod generation_test;

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::net::api;
use crate::net::http::HttpClient;

/// Lifecycle of the latest chart-generation request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PromptStatus {
    /// Nothing submitted yet.
    #[default]
    Idle,
    /// A request is in flight; further submissions are ignored.
    Loading,
    /// The last request produced a chart.
    Success,
    /// The last request failed; details are in the error signal.
    Error,
}

/// Validate a prompt for submission: trims whitespace, rejects empty
/// input, and rejects re-entry while a request is in flight.
pub fn prepare_prompt(input: &str, status: PromptStatus) -> Option<String> {
    if status == PromptStatus::Loading {
        return None;
    }
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_owned())
}

/// Submit `input` to the backend and resolve the signals with the result.
///
/// No-op when the guard rejects the input. On failure the previous chart
/// stays visible and the failure text lands in `error`.
pub async fn run_generation(
    status: RwSignal<PromptStatus>,
    chart_url: RwSignal<Option<String>>,
    error: RwSignal<Option<String>>,
    client: &dyn HttpClient,
    config: &AppConfig,
    access_token: &str,
    input: &str,
) {
    let Some(prompt) = prepare_prompt(input, status.get_untracked()) else {
        return;
    };
    status.set(PromptStatus::Loading);
    error.set(None);
    match api::generate_chart(client, config, access_token, &prompt).await {
        Ok(url) => {
            chart_url.set(Some(url));
            status.set(PromptStatus::Success);
        }
        Err(e) => {
            log::error!("chart generation failed: {e}");
            error.set(Some(format!("chart generation failed: {e}")));
            status.set(PromptStatus::Error);
        }
    }
}
