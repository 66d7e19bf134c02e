//! Domain layer containing business entities and repository contracts.
//!
//! - [`entities`] - Core data structures ([`entities::ShortUrl`], [`entities::Click`])
//! - [`repositories`] - Store trait definitions
//! - [`clock`] - Injectable time source
//!
//! The domain layer has no dependencies on infrastructure or presentation layers.

pub mod clock;
pub mod entities;
pub mod repositories;
