//! # Short URLs
//!
//! An in-memory URL shortening service built with Axum, with per-link click
//! statistics and a forwarder for a remote log collector.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, repository traits and the clock
//! - **Application Layer** ([`application`]) - Creation, resolution and statistics
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory stores, access log file,
//!   remote log forwarder
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Custom or generated six-character shortcodes
//! - Lazy expiry: expired links stop redirecting but keep their statistics
//! - Click history with referrer per short link
//! - Request/response diagnostic file
//! - Best-effort forwarding of service events to a log collector
//!
//! ## Quick Start
//!
//! ```bash
//! export BASE_URL="http://localhost:5000"
//! cargo run
//!
//! curl -X POST localhost:5000/shorturls \
//!   -H 'content-type: application/json' \
//!   -d '{"url":"https://example.com","validity":60}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;
pub mod telemetry;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{CreateShortUrl, ShortUrlService, ShortUrlStats};
    pub use crate::domain::clock::{Clock, SystemClock};
    pub use crate::domain::entities::{Click, ShortUrl};
    pub use crate::error::AppError;
    pub use crate::infrastructure::remote_log::{Level, LogForwarder, Package, Stack};
    pub use crate::state::AppState;
}
