//! Wire DTOs for the auth and chart-generation endpoints.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camel-cased JSON. `ChartResponse`
//! accepts both `supersetUrl` and the older `url` key because backend
//! deployments disagree on the field name.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated platform user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Display and login name.
    pub username: String,
    /// Bearer token attached to chart-generation requests.
    pub access_token: String,
}

/// Login request body for `POST /api/v1/auth`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Chart-generation request body for `POST /api/v1/charts/generate`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartRequest {
    /// Free-text description of the desired chart.
    pub prompt: String,
    /// Model identifier forwarded to the chart-generation agent.
    pub model_name: String,
    /// Source URLs for ad-hoc ingestion; always empty for this UI.
    pub source_urls: Vec<String>,
    /// Superset dataset the chart is built against.
    pub target_dataset_id: u32,
}

/// Chart-generation response carrying the embeddable chart location.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartResponse {
    /// Superset Explore URL for the generated chart.
    #[serde(alias = "url")]
    pub superset_url: String,
}
