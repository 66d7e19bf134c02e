//! Repository trait definitions for the domain layer.
//!
//! Implementations live in `crate::infrastructure::storage`; mocks are
//! generated via `mockall` for service tests.
//!
//! - [`ShortUrlRepository`] - alias → record store
//! - [`ClickRepository`] - alias → click sequence store

pub mod click_repository;
pub mod short_url_repository;

pub use click_repository::ClickRepository;
pub use short_url_repository::ShortUrlRepository;

#[cfg(test)]
pub use click_repository::MockClickRepository;
#[cfg(test)]
pub use short_url_repository::MockShortUrlRepository;
