//! Middleware writing every request and response to the diagnostic file.

use std::sync::Arc;

use axum::{
    body::{Body, Bytes, to_bytes},
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use serde_json::{Map, Value, json};
use tracing::error;

use crate::error::AppError;
use crate::infrastructure::access_log::AccessLog;
use crate::utils::timestamp::format_millis;

/// Largest body buffered for logging.
pub const MAX_LOGGED_BODY: usize = 2 * 1024 * 1024;

/// Records the request, runs the handler, then records the response.
///
/// # Log Format
///
/// ```text
/// {"timestamp":"2026-10-18T12:00:00.000Z","method":"POST","url":"/shorturls","body":{"url":"https://example.com"},"headers":{...}}
/// Response: {"status":201,"body":{"shortlink":"http://localhost:5000/abc123","expiry":"..."}}
/// ```
///
/// Bodies are logged as JSON when they parse, as text otherwise, and as
/// `null` when empty.
///
/// # Errors
///
/// Returns 400 Bad Request if the request body exceeds [`MAX_LOGGED_BODY`].
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/", get(root_handler))
///     .layer(middleware::from_fn_with_state(access_log, access_log::layer));
/// ```
pub async fn layer(
    State(log): State<Arc<AccessLog>>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (parts, body) = req.into_parts();
    let bytes = to_bytes(body, MAX_LOGGED_BODY)
        .await
        .map_err(|_| AppError::invalid_input("Request body too large"))?;

    let url = parts
        .uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");

    let entry = json!({
        "timestamp": format_millis(&Utc::now()),
        "method": parts.method.as_str(),
        "url": url,
        "body": body_value(&bytes),
        "headers": headers_value(&parts.headers),
    });
    log.append(&entry.to_string()).await;

    let response = next.run(Request::from_parts(parts, Body::from(bytes))).await;

    let (parts, body) = response.into_parts();
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(e) => {
            error!("Failed to buffer response body for access log: {}", e);
            return Ok(Response::from_parts(parts, Body::empty()));
        }
    };

    let outcome = json!({
        "status": parts.status.as_u16(),
        "body": body_value(&bytes),
    });
    log.append(&format!("Response: {}", outcome)).await;

    Ok(Response::from_parts(parts, Body::from(bytes)))
}

fn body_value(bytes: &Bytes) -> Value {
    if bytes.is_empty() {
        return Value::Null;
    }

    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}

/// Header map as a JSON object; repeated headers are joined with `, `.
fn headers_value(headers: &HeaderMap) -> Value {
    let mut map = Map::new();

    for name in headers.keys() {
        let joined = headers
            .get_all(name)
            .iter()
            .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
            .collect::<Vec<_>>()
            .join(", ");
        map.insert(name.as_str().to_string(), Value::String(joined));
    }

    Value::Object(map)
}
