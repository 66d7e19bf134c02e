//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:5000`)
//! - `BASE_URL` - Prefix for returned short links (default: `http://localhost:5000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DEFAULT_VALIDITY_MINUTES` - Lifetime when a request omits `validity` (default: 30)
//! - `MAX_ALIAS_ATTEMPTS` - Generated candidates tried before giving up (default: 10)
//! - `ACCESS_LOG_PATH` - Request/response diagnostic file (default: `logs.txt`, empty disables)
//! - `LOG_COLLECTOR_URL` - Remote log collector endpoint (optional)
//! - `LOG_COLLECTOR_TOKEN` - Bearer token for the collector (optional)
//! - `LOG_COLLECTOR_TIMEOUT_SECS` - Collector request timeout (default: 5)
//!
//! ```bash
//! export BASE_URL="https://sho.rt"
//! export LOG_COLLECTOR_URL="https://logs.example.com/evaluation-service/logs"
//! export LOG_COLLECTOR_TOKEN="..."
//! ```

use crate::domain::entities::validity_from_minutes;
use anyhow::Result;
use chrono::Utc;
use std::env;
use std::str::FromStr;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub base_url: String,
    pub log_level: String,
    pub log_format: String,
    /// Validity applied when a create request has no `validity` field.
    pub default_validity_minutes: i64,
    /// Upper bound on alias generation retries before failing the request.
    pub max_alias_attempts: usize,
    /// `None` disables the request/response diagnostic file.
    pub access_log_path: Option<String>,

    // ── Remote log collector ───────────────────────────────────────────────
    /// `None` keeps all forwarded entries local.
    pub log_collector_url: Option<String>,
    /// Sent as `Authorization: Bearer <token>`. Never hard-coded.
    pub log_collector_token: Option<String>,
    pub log_collector_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:5000".to_string(),
            base_url: "http://localhost:5000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            default_validity_minutes: 30,
            max_alias_attempts: 10,
            access_log_path: Some("logs.txt".to_string()),
            log_collector_url: None,
            log_collector_token: None,
            log_collector_timeout_secs: 5,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unset variables take their defaults; numeric variables that fail to
    /// parse also fall back to the default.
    ///
    /// # Errors
    ///
    /// Currently infallible; returns `Result` to match the validation flow.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let base_url = env::var("BASE_URL").unwrap_or(defaults.base_url);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        let default_validity_minutes =
            parse_var("DEFAULT_VALIDITY_MINUTES").unwrap_or(defaults.default_validity_minutes);

        let max_alias_attempts =
            parse_var("MAX_ALIAS_ATTEMPTS").unwrap_or(defaults.max_alias_attempts);

        let access_log_path = match env::var("ACCESS_LOG_PATH") {
            Ok(path) if path.trim().is_empty() => None,
            Ok(path) => Some(path),
            Err(_) => defaults.access_log_path,
        };

        let log_collector_url = non_empty_var("LOG_COLLECTOR_URL");
        let log_collector_token = non_empty_var("LOG_COLLECTOR_TOKEN");

        let log_collector_timeout_secs =
            parse_var("LOG_COLLECTOR_TIMEOUT_SECS").unwrap_or(defaults.log_collector_timeout_secs);

        Ok(Self {
            listen_addr,
            base_url,
            log_level,
            log_format,
            default_validity_minutes,
            max_alias_attempts,
            access_log_path,
            log_collector_url,
            log_collector_token,
            log_collector_timeout_secs,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `base_url` is not an http(s) URL
    /// - `default_validity_minutes` is not positive or puts the expiry out of range
    /// - `max_alias_attempts` is outside 1..=1000
    /// - `log_collector_url` is set but not an http(s) URL
    /// - `log_collector_timeout_secs` is zero
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !is_http_url(&self.base_url) {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        if self.default_validity_minutes <= 0 {
            anyhow::bail!(
                "DEFAULT_VALIDITY_MINUTES must be greater than 0, got {}",
                self.default_validity_minutes
            );
        }

        let fits = validity_from_minutes(self.default_validity_minutes as f64)
            .and_then(|v| Utc::now().checked_add_signed(v))
            .is_some();
        if !fits {
            anyhow::bail!(
                "DEFAULT_VALIDITY_MINUTES is too large, got {}",
                self.default_validity_minutes
            );
        }

        if self.max_alias_attempts == 0 || self.max_alias_attempts > 1000 {
            anyhow::bail!(
                "MAX_ALIAS_ATTEMPTS must be between 1 and 1000, got {}",
                self.max_alias_attempts
            );
        }

        if let Some(ref url) = self.log_collector_url
            && !is_http_url(url)
        {
            anyhow::bail!(
                "LOG_COLLECTOR_URL must start with 'http://' or 'https://', got '{}'",
                url
            );
        }

        if self.log_collector_timeout_secs == 0 {
            anyhow::bail!("LOG_COLLECTOR_TIMEOUT_SECS must be greater than 0");
        }

        Ok(())
    }

    /// Returns whether entries are forwarded to a remote collector.
    pub fn is_collector_enabled(&self) -> bool {
        self.log_collector_url.is_some()
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Default validity: {} min", self.default_validity_minutes);
        tracing::info!("  Max alias attempts: {}", self.max_alias_attempts);

        match self.access_log_path {
            Some(ref path) => tracing::info!("  Access log: {}", path),
            None => tracing::info!("  Access log: disabled"),
        }

        if let Some(ref url) = self.log_collector_url {
            tracing::info!(
                "  Log collector: {} (token: {})",
                url,
                mask_secret(self.log_collector_token.as_deref())
            );
        } else {
            tracing::info!("  Log collector: disabled (local only)");
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Masks a secret for logging, keeping only its last four characters.
///
/// - `None` → `none`
/// - `abcd` or shorter → `***`
/// - `secret-token-1234` → `***1234`
fn mask_secret(secret: Option<&str>) -> String {
    match secret {
        None => "none".to_string(),
        Some(s) if s.chars().count() <= 4 => "***".to_string(),
        Some(s) => {
            let tail: String = s
                .chars()
                .rev()
                .take(4)
                .collect::<Vec<_>>()
                .into_iter()
                .rev()
                .collect();
            format!("***{}", tail)
        }
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "LISTEN",
        "BASE_URL",
        "RUST_LOG",
        "LOG_FORMAT",
        "DEFAULT_VALIDITY_MINUTES",
        "MAX_ALIAS_ATTEMPTS",
        "ACCESS_LOG_PATH",
        "LOG_COLLECTOR_URL",
        "LOG_COLLECTOR_TOKEN",
        "LOG_COLLECTOR_TIMEOUT_SECS",
    ];

    fn clear_env() {
        // SAFETY: Tests touching the environment run serially via #[serial]
        unsafe {
            for var in VARS {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret(None), "none");
        assert_eq!(mask_secret(Some("abc")), "***");
        assert_eq!(mask_secret(Some("secret-token-1234")), "***1234");
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "5000".to_string();
        assert!(config.validate().is_err());
        config.listen_addr = "0.0.0.0:5000".to_string();

        config.base_url = "localhost:5000".to_string();
        assert!(config.validate().is_err());
        config.base_url = "https://sho.rt".to_string();

        config.default_validity_minutes = 0;
        assert!(config.validate().is_err());
        config.default_validity_minutes = 1_000_000_000_000;
        assert!(config.validate().is_err());
        config.default_validity_minutes = i64::MAX;
        assert!(config.validate().is_err());
        config.default_validity_minutes = 30;

        config.max_alias_attempts = 0;
        assert!(config.validate().is_err());
        config.max_alias_attempts = 1001;
        assert!(config.validate().is_err());
        config.max_alias_attempts = 10;

        config.log_collector_url = Some("ftp://logs".to_string());
        assert!(config.validate().is_err());
        config.log_collector_url = Some("http://logs.local/ingest".to_string());
        assert!(config.validate().is_ok());

        config.log_collector_timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();

        let config = Config::from_env().unwrap();

        assert_eq!(config.listen_addr, "0.0.0.0:5000");
        assert_eq!(config.base_url, "http://localhost:5000");
        assert_eq!(config.default_validity_minutes, 30);
        assert_eq!(config.max_alias_attempts, 10);
        assert_eq!(config.access_log_path.as_deref(), Some("logs.txt"));
        assert!(!config.is_collector_enabled());
        assert!(config.log_collector_token.is_none());
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("LISTEN", "127.0.0.1:8080");
            env::set_var("BASE_URL", "https://sho.rt");
            env::set_var("DEFAULT_VALIDITY_MINUTES", "60");
            env::set_var("MAX_ALIAS_ATTEMPTS", "25");
            env::set_var("LOG_COLLECTOR_URL", "http://collector.local/logs");
            env::set_var("LOG_COLLECTOR_TOKEN", "abc-123");
            env::set_var("LOG_COLLECTOR_TIMEOUT_SECS", "2");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.listen_addr, "127.0.0.1:8080");
        assert_eq!(config.base_url, "https://sho.rt");
        assert_eq!(config.default_validity_minutes, 60);
        assert_eq!(config.max_alias_attempts, 25);
        assert!(config.is_collector_enabled());
        assert_eq!(config.log_collector_token.as_deref(), Some("abc-123"));
        assert_eq!(config.log_collector_timeout_secs, 2);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_empty_access_log_path_disables() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("ACCESS_LOG_PATH", "");
            env::set_var("LOG_COLLECTOR_TOKEN", "  ");
        }

        let config = Config::from_env().unwrap();

        assert!(config.access_log_path.is_none());
        assert!(config.log_collector_token.is_none());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_unparseable_number_falls_back() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("DEFAULT_VALIDITY_MINUTES", "soon");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.default_validity_minutes, 30);

        clear_env();
    }
}
