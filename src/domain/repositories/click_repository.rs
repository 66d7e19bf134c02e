//! Repository trait for per-alias click sequences.

use crate::domain::entities::Click;
use crate::error::AppError;
use async_trait::async_trait;

/// Click log store: alias → ordered sequence of [`Click`].
///
/// Sequences preserve append order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickRepository: Send + Sync {
    /// Creates an empty click sequence for a freshly created alias.
    ///
    /// Leaves an existing sequence untouched.
    async fn init(&self, alias: &str) -> Result<(), AppError>;

    /// Appends a click to the alias's sequence.
    async fn append(&self, alias: &str, click: Click) -> Result<(), AppError>;

    /// Returns all clicks for the alias in append order.
    ///
    /// Unknown aliases yield an empty sequence.
    async fn list(&self, alias: &str) -> Result<Vec<Click>, AppError>;
}
