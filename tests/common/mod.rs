#![allow(dead_code)]

use axum_test::TestServer;
use chrono::{TimeZone, Utc};
use std::sync::Arc;
use shorturls::application::services::ShortUrlService;
use shorturls::domain::clock::test_clock::ManualClock;
use shorturls::infrastructure::remote_log::LogForwarder;
use shorturls::infrastructure::storage::{InMemoryClickRepository, InMemoryShortUrlRepository};
use shorturls::routes::router;
use shorturls::state::AppState;

pub const BASE_URL: &str = "http://localhost:5000";

/// Fresh state with its own stores and a clock pinned to 2026-01-01T00:00:00Z.
pub fn create_test_state() -> (AppState, ManualClock) {
    let clock = ManualClock::new(Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap());

    let service = ShortUrlService::new(
        Arc::new(InMemoryShortUrlRepository::new()),
        Arc::new(InMemoryClickRepository::new()),
        Arc::new(clock.clone()),
    );

    let state = AppState::new(Arc::new(service), LogForwarder::local_only(), BASE_URL);

    (state, clock)
}

pub fn create_test_server(state: AppState) -> TestServer {
    TestServer::new(router(state)).unwrap()
}

/// Creates a short URL through the API and returns its alias.
pub async fn create_short_url(server: &TestServer, body: serde_json::Value) -> String {
    let response = server.post("/shorturls").json(&body).await;
    response.assert_status(axum::http::StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    let shortlink = json["shortlink"].as_str().unwrap();
    shortlink
        .strip_prefix(&format!("{}/", BASE_URL))
        .unwrap()
        .to_string()
}
