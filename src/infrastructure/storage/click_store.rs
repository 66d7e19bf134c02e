//! In-memory click log store backed by `DashMap`.

use crate::domain::entities::Click;
use crate::domain::repositories::ClickRepository;
use crate::error::AppError;
use async_trait::async_trait;
use dashmap::DashMap;

/// Process-lifetime alias → click sequence map.
///
/// Appends take the entry's write guard, so clicks for one alias are kept in
/// the order the appends ran.
#[derive(Debug, Default)]
pub struct InMemoryClickRepository {
    clicks: DashMap<String, Vec<Click>>,
}

impl InMemoryClickRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ClickRepository for InMemoryClickRepository {
    async fn init(&self, alias: &str) -> Result<(), AppError> {
        self.clicks.entry(alias.to_string()).or_default();
        Ok(())
    }

    async fn append(&self, alias: &str, click: Click) -> Result<(), AppError> {
        self.clicks.entry(alias.to_string()).or_default().push(click);
        Ok(())
    }

    async fn list(&self, alias: &str) -> Result<Vec<Click>, AppError> {
        Ok(self
            .clicks
            .get(alias)
            .map(|c| c.value().clone())
            .unwrap_or_default())
    }
}
