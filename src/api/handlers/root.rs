//! Handler for the service banner.

use axum::Json;

use crate::api::dto::root::ServiceInfo;

/// Reports that the service is up.
///
/// # Endpoint
///
/// `GET /`
///
/// # Response
///
/// ```json
/// { "message": "URL Shortener Microservice API", "status": "running" }
/// ```
pub async fn root_handler() -> Json<ServiceInfo> {
    Json(ServiceInfo::default())
}
