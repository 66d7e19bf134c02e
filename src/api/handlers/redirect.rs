//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::debug;
use url::Url;

use crate::error::AppError;
use crate::infrastructure::remote_log::{Level, Package, Stack};
use crate::state::AppState;

/// Redirects an alias to its original URL and records the click.
///
/// # Endpoint
///
/// `GET /{shortcode}`
///
/// # Click Tracking
///
/// Each successful redirect appends `{timestamp, referrer, location}` to the
/// alias's click log. The referrer comes from the `Referer` header
/// (`"Unknown"` if absent); location is always `"Unknown"`.
///
/// # Errors
///
/// Returns 404 Not Found if the alias is unknown or expired. Expired
/// aliases are not removed; their statistics remain available.
pub async fn redirect_handler(
    Path(shortcode): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let referrer = headers.get(header::REFERER).and_then(|v| v.to_str().ok());

    let record = match state.short_url_service.resolve(&shortcode, referrer).await {
        Ok(record) => record,
        Err(e @ AppError::NotFound(_)) => {
            state.remote_log.spawn(
                Stack::Backend,
                Level::Warn,
                Package::Route,
                format!("Short URL not found or expired: {}", shortcode),
            );
            return Err(e);
        }
        Err(e) => return Err(e),
    };

    debug!(alias = %shortcode, url = %record.original_url, "Redirecting");

    let location = location_header(&record.original_url)?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

/// Builds a `Location` value, percent-encoding the URL if it has characters a
/// header cannot carry.
fn location_header(original_url: &str) -> Result<HeaderValue, AppError> {
    if let Ok(value) = HeaderValue::from_str(original_url) {
        return Ok(value);
    }

    Url::parse(original_url)
        .ok()
        .and_then(|url| HeaderValue::from_str(url.as_str()).ok())
        .ok_or_else(|| AppError::internal("Stored URL cannot be used as a redirect target"))
}
