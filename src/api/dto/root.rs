//! DTO for the service banner at `/`.

use serde::Serialize;

/// Basic liveness banner.
#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub message: &'static str,
    pub status: &'static str,
}

impl Default for ServiceInfo {
    fn default() -> Self {
        Self {
            message: "URL Shortener Microservice API",
            status: "running",
        }
    }
}
