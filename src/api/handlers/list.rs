//! Handler for listing every alias.

use axum::{Json, extract::State};

use tracing::debug;

use crate::api::dto::stats::AliasListResponse;
use crate::error::AppError;
use crate::infrastructure::remote_log::{Level, Package, Stack};
use crate::state::AppState;

/// Lists all aliases in the record store, expired ones included.
///
/// # Endpoint
///
/// `GET /shorturls/all`
///
/// Order is unspecified.
pub async fn list_handler(
    State(state): State<AppState>,
) -> Result<Json<AliasListResponse>, AppError> {
    let shortcodes = state.short_url_service.list_aliases().await?;

    debug!(count = shortcodes.len(), "Listing aliases");
    state.remote_log.spawn(
        Stack::Backend,
        Level::Debug,
        Package::Handler,
        format!("Listed {} short URLs", shortcodes.len()),
    );

    Ok(Json(AliasListResponse { shortcodes }))
}
