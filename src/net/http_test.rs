use super::*;
use futures::executor::block_on;

// =============================================================
// Status classification
// =============================================================

#[test]
fn is_success_covers_the_2xx_range() {
    let resp = |status| HttpResponse { status, body: String::new() };
    assert!(!resp(199).is_success());
    assert!(resp(200).is_success());
    assert!(resp(204).is_success());
    assert!(resp(299).is_success());
    assert!(!resp(300).is_success());
    assert!(!resp(500).is_success());
}

// =============================================================
// Error display
// =============================================================

#[test]
fn network_error_includes_the_cause() {
    let err = HttpError::Network("connection refused".to_owned());
    assert_eq!(err.to_string(), "network error: connection refused");
}

#[test]
fn unavailable_error_names_the_browser_requirement() {
    assert_eq!(
        HttpError::Unavailable.to_string(),
        "http transport not available outside the browser"
    );
}

// =============================================================
// Host-side stub
// =============================================================

#[test]
fn fetch_client_reports_unavailable_on_the_host() {
    let result = block_on(FetchClient.post_json("/api/v1/auth", None, &serde_json::json!({})));
    assert_eq!(result, Err(HttpError::Unavailable));
}
