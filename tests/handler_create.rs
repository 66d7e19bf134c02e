mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_create_with_generated_alias() {
    let (state, _clock) = common::create_test_state();
    let server = common::create_test_server(state);

    let response = server
        .post("/shorturls")
        .json(&json!({ "url": "https://example.com/a", "validity": 30 }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    let shortlink = json["shortlink"].as_str().unwrap();
    let alias = shortlink.strip_prefix("http://localhost:5000/").unwrap();

    assert_eq!(alias.len(), 6);
    assert!(alias.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(json["expiry"], "2026-01-01T00:30:00.000Z");
}

#[tokio::test]
async fn test_create_with_custom_shortcode() {
    let (state, _clock) = common::create_test_state();
    let server = common::create_test_server(state);

    let response = server
        .post("/shorturls")
        .json(&json!({ "url": "https://example.com/x", "validity": 5, "shortcode": "promo" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["shortlink"], "http://localhost:5000/promo");
    assert_eq!(json["expiry"], "2026-01-01T00:05:00.000Z");
}

#[tokio::test]
async fn test_create_default_validity() {
    let (state, _clock) = common::create_test_state();
    let server = common::create_test_server(state);

    let response = server
        .post("/shorturls")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["expiry"], "2026-01-01T00:30:00.000Z");
}

#[tokio::test]
async fn test_create_taken_shortcode_falls_back_to_generated() {
    let (state, _clock) = common::create_test_state();
    let server = common::create_test_server(state);

    let first = common::create_short_url(
        &server,
        json!({ "url": "https://example.com/1", "shortcode": "taken" }),
    )
    .await;
    let second = common::create_short_url(
        &server,
        json!({ "url": "https://example.com/2", "shortcode": "taken" }),
    )
    .await;

    assert_eq!(first, "taken");
    assert_ne!(second, "taken");
    assert_eq!(second.len(), 6);

    let stats = server.get("/shorturls/taken").await.json::<serde_json::Value>();
    assert_eq!(stats["originalUrl"], "https://example.com/1");
}

#[tokio::test]
async fn test_create_empty_shortcode_is_ignored() {
    let (state, _clock) = common::create_test_state();
    let server = common::create_test_server(state);

    let alias = common::create_short_url(
        &server,
        json!({ "url": "https://example.com", "shortcode": "" }),
    )
    .await;

    assert_eq!(alias.len(), 6);
}

#[tokio::test]
async fn test_create_invalid_url() {
    let (state, _clock) = common::create_test_state();
    let server = common::create_test_server(state);

    for body in [
        json!({ "url": "not a url" }),
        json!({ "url": "" }),
        json!({ "validity": 10 }),
        json!({ "url": "mailto:someone@example.com" }),
    ] {
        let response = server.post("/shorturls").json(&body).await;

        response.assert_status_bad_request();
        response.assert_json(&json!({ "error": "Invalid URL" }));
    }
}

#[tokio::test]
async fn test_create_non_positive_validity() {
    let (state, _clock) = common::create_test_state();
    let server = common::create_test_server(state);

    for validity in [json!(0), json!(-5), json!(-0.25)] {
        let response = server
            .post("/shorturls")
            .json(&json!({ "url": "https://example.com", "validity": validity }))
            .await;

        response.assert_status_bad_request();
        response.assert_json(&json!({ "error": "Validity must be positive" }));
    }
}

#[tokio::test]
async fn test_create_fractional_validity() {
    let (state, _clock) = common::create_test_state();
    let server = common::create_test_server(state);

    let response = server
        .post("/shorturls")
        .json(&json!({ "url": "https://example.com", "validity": 1.5 }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["expiry"], "2026-01-01T00:01:30.000Z");
}

#[tokio::test]
async fn test_create_null_validity_uses_default() {
    let (state, _clock) = common::create_test_state();
    let server = common::create_test_server(state);

    let response = server
        .post("/shorturls")
        .json(&json!({ "url": "https://example.com", "validity": null }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["expiry"], "2026-01-01T00:30:00.000Z");
}

#[tokio::test]
async fn test_create_out_of_range_validity() {
    let (state, _clock) = common::create_test_state();
    let server = common::create_test_server(state);

    for validity in [json!(1_000_000_000_000_i64), json!(1e300)] {
        let response = server
            .post("/shorturls")
            .json(&json!({ "url": "https://example.com", "validity": validity, "shortcode": "far" }))
            .await;

        response.assert_status_bad_request();
        response.assert_json(&json!({ "error": "Validity is too large" }));
    }

    server.get("/shorturls/far").await.assert_status_not_found();

    let response = server
        .post("/shorturls")
        .json(&json!({ "url": "https://example.com", "validity": 1 }))
        .await;
    response.assert_status(StatusCode::CREATED);
}

#[tokio::test]
async fn test_create_url_checked_before_validity() {
    let (state, _clock) = common::create_test_state();
    let server = common::create_test_server(state);

    let response = server
        .post("/shorturls")
        .json(&json!({ "url": "nope", "validity": 0 }))
        .await;

    response.assert_status_bad_request();
    response.assert_json(&json!({ "error": "Invalid URL" }));
}

#[tokio::test]
async fn test_create_malformed_json() {
    let (state, _clock) = common::create_test_state();
    let server = common::create_test_server(state);

    let response = server
        .post("/shorturls")
        .text("{not json")
        .content_type("application/json")
        .await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert!(json["error"].is_string());
}
