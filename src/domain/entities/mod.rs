//! Core domain entities.
//!
//! - [`ShortUrl`] - An alias → URL mapping with its validity window
//! - [`Click`] - A single redirect traversal of an alias

pub mod click;
pub mod short_url;

pub use click::{Click, UNKNOWN};
pub use short_url::{ShortUrl, validity_from_minutes};
