//! Handler for per-alias statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use tracing::debug;

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::infrastructure::remote_log::{Level, Package, Stack};
use crate::state::AppState;

/// Returns a short URL's metadata and full click history.
///
/// # Endpoint
///
/// `GET /shorturls/{shortcode}`
///
/// # Response
///
/// ```json
/// {
///   "shortlink": "http://localhost:5000/abc123",
///   "originalUrl": "https://example.com",
///   "createdAt": "2026-10-18T12:00:00.000Z",
///   "expiry": "2026-10-18T12:30:00.000Z",
///   "totalClicks": 1,
///   "clickData": [
///     { "timestamp": "2026-10-18T12:05:00.000Z", "referrer": "Unknown", "location": "Unknown" }
///   ]
/// }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the alias was never created. Expired aliases
/// are still reported.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(shortcode): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let stats = state.short_url_service.stats(&shortcode).await?;

    debug!(alias = %shortcode, clicks = stats.total_clicks(), "Stats retrieved");
    state.remote_log.spawn(
        Stack::Backend,
        Level::Info,
        Package::Handler,
        format!("Stats retrieved for {}", shortcode),
    );

    Ok(Json(StatsResponse::new(state.short_link(&shortcode), stats)))
}
