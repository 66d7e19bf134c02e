//! Short URL record mapping an alias to its original URL.

use chrono::{DateTime, Duration, Utc};

/// A stored alias → URL mapping with its validity window.
///
/// Records are immutable once created. Expiry is evaluated lazily by readers;
/// expired records stay in the store so their statistics remain available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortUrl {
    pub alias: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl ShortUrl {
    /// Creates a record valid for `validity` starting at `created_at`.
    ///
    /// Returns `None` if the expiry falls outside the representable time range.
    pub fn new(
        alias: String,
        original_url: String,
        created_at: DateTime<Utc>,
        validity: Duration,
    ) -> Option<Self> {
        let expires_at = created_at.checked_add_signed(validity)?;

        Some(Self {
            alias,
            original_url,
            created_at,
            expires_at,
        })
    }

    /// Returns true once `now` is strictly past the expiry time.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}

/// Converts a lifetime in minutes, possibly fractional, to a duration with
/// millisecond precision.
///
/// Returns `None` for non-finite or non-positive input and for lifetimes too
/// long to represent.
pub fn validity_from_minutes(minutes: f64) -> Option<Duration> {
    if !minutes.is_finite() || minutes <= 0.0 {
        return None;
    }

    let millis = (minutes * 60_000.0).round();
    if millis >= i64::MAX as f64 {
        return None;
    }

    Duration::try_milliseconds(millis as i64)
}
