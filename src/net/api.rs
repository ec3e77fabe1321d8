//! REST calls for login and chart generation.
//!
//! ERROR HANDLING
//! ==============
//! Callers get a typed `ApiError` so pages can show precise failure text
//! and the session flow can decide whether a failed login falls back to a
//! local session.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use crate::config::AppConfig;
use crate::net::http::{HttpClient, HttpError, HttpResponse};
use crate::net::types::{ChartRequest, ChartResponse, Credentials, User};

/// Path of the credential-login endpoint.
pub const AUTH_ENDPOINT: &str = "/api/v1/auth";
/// Path of the chart-generation endpoint.
pub const GENERATE_ENDPOINT: &str = "/api/v1/charts/generate";

/// Model identifier the backend agent runs prompts against.
const CHART_MODEL_NAME: &str = "gpt-4o";
/// Superset dataset charts are generated for.
const CHART_TARGET_DATASET_ID: u32 = 1;

/// Failure of an API call, after transport, status, and decode checks.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Transport(#[from] HttpError),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("invalid payload: {0}")]
    Payload(String),
}

/// Build the fixed-shape generation request for a prompt.
pub(crate) fn chart_request(prompt: &str) -> ChartRequest {
    ChartRequest {
        prompt: prompt.to_owned(),
        model_name: CHART_MODEL_NAME.to_owned(),
        source_urls: Vec::new(),
        target_dataset_id: CHART_TARGET_DATASET_ID,
    }
}

fn encode_body<T: serde::Serialize>(value: &T) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::Payload(e.to_string()))
}

fn decode_response<T: DeserializeOwned>(resp: &HttpResponse) -> Result<T, ApiError> {
    if !resp.is_success() {
        return Err(ApiError::Status(resp.status));
    }
    serde_json::from_str(&resp.body).map_err(|e| ApiError::Payload(e.to_string()))
}

/// Exchange credentials for an authenticated [`User`].
///
/// # Errors
///
/// Returns an error when the request fails, the server rejects the login,
/// or the response body cannot be decoded.
pub async fn login(
    client: &dyn HttpClient,
    config: &AppConfig,
    credentials: &Credentials,
) -> Result<User, ApiError> {
    let body = encode_body(credentials)?;
    let resp = client
        .post_json(&config.endpoint(AUTH_ENDPOINT), None, &body)
        .await?;
    decode_response(&resp)
}

/// Ask the backend to generate a chart for `prompt`, returning the
/// embeddable Superset URL.
///
/// # Errors
///
/// Returns an error when the request fails, the server rejects it, or the
/// response carries no chart URL.
pub async fn generate_chart(
    client: &dyn HttpClient,
    config: &AppConfig,
    access_token: &str,
    prompt: &str,
) -> Result<String, ApiError> {
    let body = encode_body(&chart_request(prompt))?;
    let resp = client
        .post_json(&config.endpoint(GENERATE_ENDPOINT), Some(access_token), &body)
        .await?;
    let decoded: ChartResponse = decode_response(&resp)?;
    Ok(decoded.superset_url)
}
