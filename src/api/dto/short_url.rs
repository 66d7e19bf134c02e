//! DTOs for short URL creation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::application::services::CreateShortUrl;
use crate::error::AppError;
use crate::utils::timestamp;
use crate::utils::url_validator::is_valid_url;

/// Request to create a short URL.
///
/// Validation errors are reported by field name, so `url` problems win over
/// `validity` problems.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateShortUrlRequest {
    /// The original URL; must be absolute.
    #[validate(
        required(message = "Invalid URL"),
        custom(function = "validate_absolute_url")
    )]
    pub url: Option<String>,

    /// Lifetime in minutes, fractions allowed (server default when omitted or null).
    #[validate(range(exclusive_min = 0.0, message = "Validity must be positive"))]
    pub validity: Option<f64>,

    /// Preferred alias, used verbatim when free.
    pub shortcode: Option<String>,
}

impl CreateShortUrlRequest {
    /// Validates the request and converts it into a service command.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidInput`] with `Invalid URL` or
    /// `Validity must be positive`.
    pub fn into_command(self, default_validity_minutes: i64) -> Result<CreateShortUrl, AppError> {
        self.validate()?;

        Ok(CreateShortUrl {
            url: self.url.unwrap_or_default(),
            validity_minutes: self
                .validity
                .unwrap_or(default_validity_minutes as f64),
            shortcode: self.shortcode,
        })
    }
}

fn validate_absolute_url(url: &str) -> Result<(), ValidationError> {
    if is_valid_url(url) {
        Ok(())
    } else {
        let mut error = ValidationError::new("url");
        error.message = Some("Invalid URL".into());
        Err(error)
    }
}

/// Response for a created short URL.
#[derive(Debug, Serialize)]
pub struct CreateShortUrlResponse {
    pub shortlink: String,
    #[serde(serialize_with = "timestamp::serialize")]
    pub expiry: DateTime<Utc>,
}
