//! Helper functions shared across layers.
//!
//! - [`alias_generator`] - Random alias generation
//! - [`url_validator`] - Absolute URL validation
//! - [`timestamp`] - Millisecond RFC 3339 formatting

pub mod alias_generator;
pub mod timestamp;
pub mod url_validator;
