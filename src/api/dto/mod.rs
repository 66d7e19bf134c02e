//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization; request bodies
//! are checked with `validator`. Field names follow the public JSON contract
//! (`originalUrl`, `totalClicks`, ...), not Rust naming.

pub mod root;
pub mod short_url;
pub mod stats;
