//! In-memory record store backed by `DashMap`.

use crate::domain::entities::ShortUrl;
use crate::domain::repositories::ShortUrlRepository;
use crate::error::AppError;
use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

/// Process-lifetime alias → [`ShortUrl`] map.
///
/// Sharded locks let concurrent requests read and write different aliases
/// without contending on a single lock.
#[derive(Debug, Default)]
pub struct InMemoryShortUrlRepository {
    records: DashMap<String, ShortUrl>,
}

impl InMemoryShortUrlRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ShortUrlRepository for InMemoryShortUrlRepository {
    async fn insert(&self, record: ShortUrl) -> Result<(), AppError> {
        match self.records.entry(record.alias.clone()) {
            Entry::Occupied(_) => Err(AppError::Conflict(record.alias)),
            Entry::Vacant(slot) => {
                slot.insert(record);
                Ok(())
            }
        }
    }

    async fn find(&self, alias: &str) -> Result<Option<ShortUrl>, AppError> {
        Ok(self.records.get(alias).map(|r| r.value().clone()))
    }

    async fn exists(&self, alias: &str) -> Result<bool, AppError> {
        Ok(self.records.contains_key(alias))
    }

    async fn aliases(&self) -> Result<Vec<String>, AppError> {
        Ok(self.records.iter().map(|r| r.key().clone()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn record(alias: &str, url: &str) -> ShortUrl {
        ShortUrl::new(
            alias.to_string(),
            url.to_string(),
            Utc::now(),
            Duration::minutes(30),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let repo = InMemoryShortUrlRepository::new();
        repo.insert(record("abc123", "https://example.com"))
            .await
            .unwrap();

        let found = repo.find("abc123").await.unwrap().unwrap();
        assert_eq!(found.original_url, "https://example.com");
        assert!(repo.exists("abc123").await.unwrap());
        assert!(repo.find("missing").await.unwrap().is_none());
        assert!(!repo.exists("missing").await.unwrap());
    }

    #[tokio::test]
    async fn test_insert_never_overwrites() {
        let repo = InMemoryShortUrlRepository::new();
        repo.insert(record("taken", "https://first.com")).await.unwrap();

        let result = repo.insert(record("taken", "https://second.com")).await;
        assert!(matches!(result, Err(AppError::Conflict(ref a)) if a == "taken"));

        let found = repo.find("taken").await.unwrap().unwrap();
        assert_eq!(found.original_url, "https://first.com");
        assert_eq!(repo.aliases().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_aliases_lists_every_key() {
        let repo = InMemoryShortUrlRepository::new();
        assert!(repo.aliases().await.unwrap().is_empty());

        for alias in ["one", "two", "three"] {
            repo.insert(record(alias, "https://example.com")).await.unwrap();
        }

        let mut aliases = repo.aliases().await.unwrap();
        aliases.sort();
        assert_eq!(aliases, vec!["one", "three", "two"]);
    }
}
