//! Application layer services implementing business logic.
//!
//! Services coordinate repository calls and business rules and give HTTP
//! handlers a small API to call.
//!
//! - [`services::ShortUrlService`] - Short URL creation, resolution and statistics

pub mod services;
