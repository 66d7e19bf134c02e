//! Repository trait for short URL records.

use crate::domain::entities::ShortUrl;
use crate::error::AppError;
use async_trait::async_trait;

/// Record store: alias → [`ShortUrl`].
///
/// # Implementations
///
/// - [`crate::infrastructure::storage::InMemoryShortUrlRepository`] - process-lifetime map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortUrlRepository: Send + Sync {
    /// Stores a new record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the alias is already present. Existing
    /// records are never overwritten, including expired ones.
    async fn insert(&self, record: ShortUrl) -> Result<(), AppError>;

    /// Finds a record by alias, regardless of expiry.
    async fn find(&self, alias: &str) -> Result<Option<ShortUrl>, AppError>;

    /// Returns true if the alias has ever been stored.
    async fn exists(&self, alias: &str) -> Result<bool, AppError>;

    /// Lists every stored alias in no particular order.
    async fn aliases(&self) -> Result<Vec<String>, AppError>;
}
