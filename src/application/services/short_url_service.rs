//! Short URL creation, resolution and statistics service.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info};

use crate::domain::clock::Clock;
use crate::domain::entities::{Click, ShortUrl, validity_from_minutes};
use crate::domain::repositories::{ClickRepository, ShortUrlRepository};
use crate::error::AppError;
use crate::utils::alias_generator::{DEFAULT_MAX_ATTEMPTS, generate_alias};
use crate::utils::url_validator::is_valid_url;

const VALIDITY_TOO_LARGE: &str = "Validity is too large";

/// Input for creating a short URL.
#[derive(Debug, Clone)]
pub struct CreateShortUrl {
    pub url: String,
    /// Lifetime in minutes; fractions are kept to the millisecond.
    pub validity_minutes: f64,
    /// Preferred alias. Used verbatim when free; ignored when taken or empty.
    pub shortcode: Option<String>,
}

/// A record together with its click history.
#[derive(Debug, Clone)]
pub struct ShortUrlStats {
    pub record: ShortUrl,
    pub clicks: Vec<Click>,
}

impl ShortUrlStats {
    pub fn total_clicks(&self) -> usize {
        self.clicks.len()
    }
}

/// Service composing the record store, the click log store and the clock.
///
/// Expiry is lazy: expired records stay stored, [`Self::resolve`] treats them
/// as missing, and [`Self::stats`] keeps reporting them.
pub struct ShortUrlService<R: ShortUrlRepository, C: ClickRepository> {
    records: Arc<R>,
    clicks: Arc<C>,
    clock: Arc<dyn Clock>,
    max_alias_attempts: usize,
}

impl<R: ShortUrlRepository, C: ClickRepository> ShortUrlService<R, C> {
    /// Creates a new service with the default alias retry bound.
    pub fn new(records: Arc<R>, clicks: Arc<C>, clock: Arc<dyn Clock>) -> Self {
        Self {
            records,
            clicks,
            clock,
            max_alias_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Overrides how many generated candidates are tried before giving up.
    pub fn with_max_alias_attempts(mut self, attempts: usize) -> Self {
        self.max_alias_attempts = attempts.max(1);
        self
    }

    /// Creates a short URL.
    ///
    /// # Alias Selection
    ///
    /// - A supplied, non-empty, unused `shortcode` is taken as-is
    /// - Otherwise a random alias is generated, retrying on collision
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidInput`] if the URL is not absolute, the
    /// validity is not positive, or the expiry would be out of range (checked
    /// in that order).
    ///
    /// Returns [`AppError::AliasSpaceExhausted`] if every generated candidate
    /// collided.
    pub async fn create(&self, request: CreateShortUrl) -> Result<ShortUrl, AppError> {
        if !is_valid_url(&request.url) {
            return Err(AppError::invalid_input("Invalid URL"));
        }

        if !request.validity_minutes.is_finite() || request.validity_minutes <= 0.0 {
            return Err(AppError::invalid_input("Validity must be positive"));
        }

        let now = self.clock.now();
        let validity = validity_from_minutes(request.validity_minutes)
            .filter(|v| now.checked_add_signed(*v).is_some())
            .ok_or_else(|| AppError::invalid_input(VALIDITY_TOO_LARGE))?;

        if let Some(code) = request.shortcode.filter(|c| !c.is_empty()) {
            if self.records.exists(&code).await? {
                debug!(alias = %code, "Requested alias taken, generating one");
            } else {
                match self.store(code, &request.url, now, validity).await {
                    Ok(record) => return Ok(record),
                    Err(AppError::Conflict(alias)) => {
                        debug!(%alias, "Requested alias claimed concurrently, generating one");
                    }
                    Err(e) => return Err(e),
                }
            }
        }

        for _ in 0..self.max_alias_attempts {
            let candidate = generate_alias();

            if self.records.exists(&candidate).await? {
                continue;
            }

            match self.store(candidate, &request.url, now, validity).await {
                Ok(record) => return Ok(record),
                Err(AppError::Conflict(_)) => continue,
                Err(e) => return Err(e),
            }
        }

        Err(AppError::AliasSpaceExhausted {
            attempts: self.max_alias_attempts,
        })
    }

    /// Resolves an alias for redirection and records the click.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the alias is unknown or past its expiry.
    pub async fn resolve(&self, alias: &str, referrer: Option<&str>) -> Result<ShortUrl, AppError> {
        let now = self.clock.now();

        let record = self
            .records
            .find(alias)
            .await?
            .filter(|r| !r.is_expired_at(now))
            .ok_or_else(|| AppError::not_found("Short URL not found or expired"))?;

        self.clicks.append(alias, Click::new(now, referrer)).await?;

        debug!(%alias, "Click recorded");

        Ok(record)
    }

    /// Returns the record and its full click history.
    ///
    /// Expired records are still reported.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the alias was never created.
    pub async fn stats(&self, alias: &str) -> Result<ShortUrlStats, AppError> {
        let record = self
            .records
            .find(alias)
            .await?
            .ok_or_else(|| AppError::not_found("Short URL not found"))?;

        let clicks = self.clicks.list(alias).await?;

        Ok(ShortUrlStats { record, clicks })
    }

    /// Lists every alias in the record store, expired ones included.
    pub async fn list_aliases(&self) -> Result<Vec<String>, AppError> {
        self.records.aliases().await
    }

    async fn store(
        &self,
        alias: String,
        url: &str,
        now: DateTime<Utc>,
        validity: Duration,
    ) -> Result<ShortUrl, AppError> {
        let record = ShortUrl::new(alias, url.to_string(), now, validity)
            .ok_or_else(|| AppError::invalid_input(VALIDITY_TOO_LARGE))?;

        self.records.insert(record.clone()).await?;
        self.clicks.init(&record.alias).await?;

        info!(
            alias = %record.alias,
            expires_at = %record.expires_at,
            "Short URL created"
        );

        Ok(record)
    }
}
