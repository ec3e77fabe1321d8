use super::*;

// =============================================================
// User
// =============================================================

#[test]
fn user_deserializes_camel_case_token() {
    let user: User = serde_json::from_str(r#"{"username":"ken","accessToken":"tok-1"}"#)
        .expect("user should parse");
    assert_eq!(user.username, "ken");
    assert_eq!(user.access_token, "tok-1");
}

#[test]
fn user_serializes_camel_case_token() {
    let user = User { username: "ken".to_owned(), access_token: "tok-1".to_owned() };
    let value = serde_json::to_value(&user).expect("user should serialize");
    assert_eq!(value, serde_json::json!({ "username": "ken", "accessToken": "tok-1" }));
}

#[test]
fn user_rejects_missing_token() {
    let result = serde_json::from_str::<User>(r#"{"username":"ken"}"#);
    assert!(result.is_err());
}

// =============================================================
// Credentials
// =============================================================

#[test]
fn credentials_serialize_plain_keys() {
    let credentials = Credentials { username: "ken".to_owned(), password: "pw".to_owned() };
    let value = serde_json::to_value(&credentials).expect("credentials should serialize");
    assert_eq!(value, serde_json::json!({ "username": "ken", "password": "pw" }));
}

// =============================================================
// ChartRequest
// =============================================================

#[test]
fn chart_request_serializes_camel_case_keys() {
    let request = ChartRequest {
        prompt: "monthly revenue".to_owned(),
        model_name: "gpt-4o".to_owned(),
        source_urls: Vec::new(),
        target_dataset_id: 1,
    };
    let value = serde_json::to_value(&request).expect("request should serialize");
    assert_eq!(
        value,
        serde_json::json!({
            "prompt": "monthly revenue",
            "modelName": "gpt-4o",
            "sourceUrls": [],
            "targetDatasetId": 1
        })
    );
}

// =============================================================
// ChartResponse
// =============================================================

#[test]
fn chart_response_parses_superset_url() {
    let resp: ChartResponse = serde_json::from_str(r#"{"supersetUrl":"https://superset/explore/1"}"#)
        .expect("response should parse");
    assert_eq!(resp.superset_url, "https://superset/explore/1");
}

#[test]
fn chart_response_accepts_legacy_url_key() {
    let resp: ChartResponse = serde_json::from_str(r#"{"url":"https://superset/explore/2"}"#)
        .expect("response should parse");
    assert_eq!(resp.superset_url, "https://superset/explore/2");
}

#[test]
fn chart_response_rejects_missing_url() {
    let result = serde_json::from_str::<ChartResponse>(r#"{"ok":true}"#);
    assert!(result.is_err());
}
