//! Handler for short URL creation.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::api::dto::short_url::{CreateShortUrlRequest, CreateShortUrlResponse};
use crate::error::AppError;
use crate::infrastructure::remote_log::{Level, Package, Stack};
use crate::state::AppState;

/// Creates a short URL.
///
/// # Endpoint
///
/// `POST /shorturls`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/some/long/path",
///   "validity": 30,          // optional, minutes
///   "shortcode": "promo"     // optional, used verbatim when free
/// }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "shortlink": "http://localhost:5000/promo",
///   "expiry": "2026-10-18T12:30:00.000Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request with `{"error": "Invalid URL"}` or
/// `{"error": "Validity must be positive"}`, or the JSON parse failure.
pub async fn create_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateShortUrlRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateShortUrlResponse>), AppError> {
    let Json(payload) = payload?;
    let command = payload.into_command(state.default_validity_minutes())?;

    let record = state.short_url_service.create(command).await?;

    state.remote_log.spawn(
        Stack::Backend,
        Level::Info,
        Package::Handler,
        format!("Short URL created: {}", record.alias),
    );

    Ok((
        StatusCode::CREATED,
        Json(CreateShortUrlResponse {
            shortlink: state.short_link(&record.alias),
            expiry: record.expires_at,
        }),
    ))
}
