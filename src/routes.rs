//! Top-level router configuration.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Access log** - Request/response lines appended to the diagnostic file
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::{access_log, tracing};
use crate::state::AppState;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with every route and middleware except path normalization.
///
/// The access log layer is only installed when the state carries a log file.
pub fn router(state: AppState) -> Router {
    let mut router = api::routes::routes().with_state(state.clone());

    if let Some(log) = state.access_log {
        router = router.layer(middleware::from_fn_with_state(log, access_log::layer));
    }

    router.layer(tracing::layer())
}

/// Constructs the served application: [`router`] with trailing slashes trimmed.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
