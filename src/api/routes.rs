//! API route configuration.

use crate::api::handlers::{
    create_handler, list_handler, redirect_handler, root_handler, stats_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All public routes.
///
/// # Endpoints
///
/// - `GET  /`                      - Service banner
/// - `POST /shorturls`             - Create a short URL
/// - `GET  /shorturls/all`         - List every stored shortcode
/// - `GET  /shorturls/{shortcode}` - Statistics for one shortcode
/// - `GET  /{shortcode}`           - Redirect to the original URL
///
/// `/shorturls/all` is a static segment, so it wins over the
/// `/shorturls/{shortcode}` capture.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root_handler))
        .route("/shorturls", post(create_handler))
        .route("/shorturls/all", get(list_handler))
        .route("/shorturls/{shortcode}", get(stats_handler))
        .route("/{shortcode}", get(redirect_handler))
}
