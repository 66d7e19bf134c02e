use axum::{Json, Router, extract::State, http::HeaderMap, http::StatusCode, routing::post};
use serde_json::{Value, json};
use shorturls::infrastructure::remote_log::{
    ForwardError, Level, LogEntry, LogForwarder, Package, Stack,
};
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Clone, Default)]
struct Received {
    entries: Arc<Mutex<Vec<(Option<String>, Value)>>>,
}

async fn collect(
    State(received): State<Received>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let mut entries = received.entries.lock().unwrap();
    entries.push((auth, body));

    (
        StatusCode::OK,
        Json(json!({ "logID": format!("log-{}", entries.len()), "message": "log created successfully" })),
    )
}

async fn reject() -> (StatusCode, Json<Value>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "message": "invalid authorization token" })),
    )
}

/// Starts a collector on an ephemeral port and returns its `/logs` URL.
async fn spawn_collector(received: Received) -> String {
    let app = Router::new()
        .route("/logs", post(collect))
        .route("/denied", post(reject))
        .with_state(received);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

fn forwarder(url: String, token: Option<&str>) -> LogForwarder {
    LogForwarder::new(
        Some(url),
        token.map(str::to_string),
        Duration::from_secs(2),
    )
    .unwrap()
}

#[tokio::test]
async fn test_forward_sends_bearer_and_body() {
    let received = Received::default();
    let base = spawn_collector(received.clone()).await;
    let forwarder = forwarder(format!("{}/logs", base), Some("secret-token"));

    let entry = LogEntry::parse("backend", "error", "handler", "received string, expected bool")
        .unwrap();
    let log_id = forwarder.forward(&entry).await.unwrap();

    assert_eq!(log_id, "log-1");

    let entries = received.entries.lock().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].0.as_deref(), Some("Bearer secret-token"));
    assert_eq!(
        entries[0].1,
        json!({
            "stack": "backend",
            "level": "error",
            "package": "handler",
            "message": "received string, expected bool"
        })
    );
}

#[tokio::test]
async fn test_forward_without_token_omits_header() {
    let received = Received::default();
    let base = spawn_collector(received.clone()).await;
    let forwarder = forwarder(format!("{}/logs", base), None);

    let entry = LogEntry::new(Stack::Frontend, Level::Info, Package::Component, "mounted").unwrap();
    forwarder.forward(&entry).await.unwrap();

    let entries = received.entries.lock().unwrap();
    assert_eq!(entries[0].0, None);
    assert_eq!(entries[0].1["stack"], "frontend");
    assert_eq!(entries[0].1["package"], "component");
}

#[tokio::test]
async fn test_forward_reports_rejection() {
    let base = spawn_collector(Received::default()).await;
    let forwarder = forwarder(format!("{}/denied", base), Some("wrong"));

    let entry = LogEntry::parse("backend", "warn", "route", "nope").unwrap();
    let err = forwarder.forward(&entry).await.unwrap_err();

    match err {
        ForwardError::Status { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "invalid authorization token");
        }
        other => panic!("unexpected error: {other}"),
    }

    // Best-effort path swallows the same failure.
    forwarder.log("backend", "warn", "route", "nope").await;
}

#[tokio::test]
async fn test_log_skips_invalid_entries() {
    let received = Received::default();
    let base = spawn_collector(received.clone()).await;
    let forwarder = forwarder(format!("{}/logs", base), Some("t"));

    forwarder.log("backend", "verbose", "handler", "x").await;
    forwarder.log("backend", "info", "handler", "").await;
    forwarder.log("backend", "info", "handler", "ok").await;

    let entries = received.entries.lock().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].1["message"], "ok");
}
