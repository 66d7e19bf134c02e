//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::ShortUrlService;
use crate::infrastructure::access_log::AccessLog;
use crate::infrastructure::remote_log::LogForwarder;
use crate::infrastructure::storage::{InMemoryClickRepository, InMemoryShortUrlRepository};

/// The service wired to the in-memory stores.
pub type InMemoryShortUrlService =
    ShortUrlService<InMemoryShortUrlRepository, InMemoryClickRepository>;

/// State shared by every request.
///
/// Each state owns its own stores, so separate instances (for example one per
/// test) never see each other's data.
#[derive(Clone)]
pub struct AppState {
    pub short_url_service: Arc<InMemoryShortUrlService>,
    pub remote_log: LogForwarder,
    pub access_log: Option<Arc<AccessLog>>,
    base_url: Arc<str>,
    default_validity_minutes: i64,
}

impl AppState {
    /// Creates state with no access log and a 30 minute default validity.
    pub fn new(
        short_url_service: Arc<InMemoryShortUrlService>,
        remote_log: LogForwarder,
        base_url: &str,
    ) -> Self {
        Self {
            short_url_service,
            remote_log,
            access_log: None,
            base_url: Arc::from(base_url.trim_end_matches('/')),
            default_validity_minutes: 30,
        }
    }

    pub fn with_access_log(mut self, access_log: Arc<AccessLog>) -> Self {
        self.access_log = Some(access_log);
        self
    }

    pub fn with_default_validity(mut self, minutes: i64) -> Self {
        self.default_validity_minutes = minutes;
        self
    }

    pub fn default_validity_minutes(&self) -> i64 {
        self.default_validity_minutes
    }

    /// Builds the public short link for an alias.
    pub fn short_link(&self, alias: &str) -> String {
        format!("{}/{}", self.base_url, alias)
    }
}
