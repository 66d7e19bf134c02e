//! Click entity representing a single redirect traversal.

use chrono::{DateTime, Utc};

/// Placeholder used when a referrer or location is unavailable.
pub const UNKNOWN: &str = "Unknown";

/// A click recorded when a short URL redirects.
///
/// Location is always [`UNKNOWN`]; no geolocation is performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Click {
    pub timestamp: DateTime<Utc>,
    pub referrer: String,
    pub location: String,
}

impl Click {
    /// Creates a click at `timestamp`.
    ///
    /// A missing or empty referrer is stored as [`UNKNOWN`].
    pub fn new(timestamp: DateTime<Utc>, referrer: Option<&str>) -> Self {
        let referrer = referrer
            .filter(|r| !r.is_empty())
            .unwrap_or(UNKNOWN)
            .to_string();

        Self {
            timestamp,
            referrer,
            location: UNKNOWN.to_string(),
        }
    }
}
