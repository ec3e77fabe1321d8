//! HTTP transport capability used by all API calls.
//!
//! SYSTEM CONTEXT
//! ==============
//! Request code depends on the `HttpClient` trait instead of calling
//! `gloo-net` directly, so session and generation flows can be driven by
//! in-memory fakes in host-side tests. `FetchClient` is the browser
//! implementation; off the browser it reports the transport as
//! unavailable instead of panicking.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use async_trait::async_trait;

/// Raw response surfaced to API decoding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body as text; empty when the body could not be read.
    pub body: String,
}

impl HttpResponse {
    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport-level failure: the request never produced a status.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum HttpError {
    #[error("network error: {0}")]
    Network(String),
    #[error("http transport not available outside the browser")]
    Unavailable,
}

/// Minimal POST-only HTTP capability.
///
/// `?Send` because browser futures are single-threaded.
#[async_trait(?Send)]
pub trait HttpClient {
    /// POST `body` as JSON to `url`, attaching `bearer` as an
    /// `Authorization: Bearer` header when present.
    ///
    /// # Errors
    ///
    /// Returns an error when the request cannot be sent or the response
    /// never arrives; HTTP error statuses are a successful transport
    /// result and are left to the caller.
    async fn post_json(
        &self,
        url: &str,
        bearer: Option<&str>,
        body: &serde_json::Value,
    ) -> Result<HttpResponse, HttpError>;
}

/// `HttpClient` backed by the browser fetch API via `gloo-net`.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchClient;

#[async_trait(?Send)]
impl HttpClient for FetchClient {
    async fn post_json(
        &self,
        url: &str,
        bearer: Option<&str>,
        body: &serde_json::Value,
    ) -> Result<HttpResponse, HttpError> {
        #[cfg(feature = "csr")]
        {
            let mut request = gloo_net::http::Request::post(url);
            if let Some(token) = bearer {
                request = request.header("Authorization", &format!("Bearer {token}"));
            }
            let resp = request
                .json(body)
                .map_err(|e| HttpError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| HttpError::Network(e.to_string()))?;
            Ok(HttpResponse {
                status: resp.status(),
                body: resp.text().await.unwrap_or_default(),
            })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (url, bearer, body);
            Err(HttpError::Unavailable)
        }
    }
}
