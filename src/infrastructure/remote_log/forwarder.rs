//! HTTP forwarder for structured log entries.

use std::time::Duration;

use reqwest::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Deserialize;
use tracing::{debug, error, info, warn};

use super::entry::{Level, LogEntry, Package, Stack};

/// Default request timeout for the collector.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Failures while delivering an entry to the collector.
#[derive(Debug, thiserror::Error)]
pub enum ForwardError {
    #[error("No log collector configured")]
    NotConfigured,

    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("Collector responded with {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Unexpected collector response: {0}")]
    InvalidResponse(String),
}

/// Successful collector reply.
#[derive(Debug, Deserialize)]
struct CollectorResponse {
    #[serde(rename = "logID")]
    log_id: String,
}

/// Error body some collectors return alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
struct CollectorError {
    message: String,
}

/// Best-effort forwarder to a remote log collector.
///
/// Never reports failure to its caller. Invalid entries, transport errors and
/// rejected requests are written to the local `remote_log` tracing target
/// instead.
///
/// Cloning is cheap; clones share the underlying HTTP connection pool.
#[derive(Debug, Clone)]
pub struct LogForwarder {
    client: Client,
    endpoint: Option<String>,
    token: Option<String>,
}

impl LogForwarder {
    /// Creates a forwarder posting to `endpoint` with an optional bearer token.
    ///
    /// With no endpoint every entry goes straight to local logging.
    ///
    /// # Errors
    ///
    /// Returns [`ForwardError::Transport`] if the HTTP client cannot be built.
    pub fn new(
        endpoint: Option<String>,
        token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, ForwardError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint,
            token: token.filter(|t| !t.is_empty()),
        })
    }

    /// A forwarder with no collector; entries are only logged locally.
    pub fn local_only() -> Self {
        Self {
            client: Client::new(),
            endpoint: None,
            token: None,
        }
    }

    pub fn is_remote(&self) -> bool {
        self.endpoint.is_some()
    }

    /// Validates a raw tuple and forwards it.
    ///
    /// Never fails: rejected input and delivery errors fall back to local logging.
    pub async fn log(&self, stack: &str, level: &str, package: &str, message: &str) {
        match LogEntry::parse(stack, level, package, message) {
            Ok(entry) => self.send(entry).await,
            Err(e) => {
                error!(target: "remote_log", "Logging error: {}", e);
                warn!(
                    target: "remote_log",
                    "Local log: {} | {} | {} | {}",
                    stack, level, package, message
                );
            }
        }
    }

    /// Forwards a typed entry on a detached task.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(&self, stack: Stack, level: Level, package: Package, message: impl Into<String>) {
        let message = message.into();

        let entry = match LogEntry::new(stack, level, package, message) {
            Ok(entry) => entry,
            Err(e) => {
                error!(target: "remote_log", "Logging error: {}", e);
                return;
            }
        };

        let forwarder = self.clone();
        tokio::spawn(async move {
            forwarder.send(entry).await;
        });
    }

    /// Sends a validated entry, falling back to local logging on failure.
    pub async fn send(&self, entry: LogEntry) {
        if !self.is_remote() {
            log_locally(&entry);
            return;
        }

        match self.forward(&entry).await {
            Ok(log_id) => {
                debug!(target: "remote_log", %log_id, "Log created successfully");
            }
            Err(e) => {
                error!(target: "remote_log", "Failed to send log: {}", e);
                warn!(
                    target: "remote_log",
                    "Local log: {} | {} | {} | {}",
                    entry.stack, entry.level, entry.package, entry.message
                );
            }
        }
    }

    /// Posts an entry to the collector and returns the assigned log id.
    ///
    /// # Errors
    ///
    /// - [`ForwardError::NotConfigured`] without an endpoint
    /// - [`ForwardError::Transport`] on connection errors or timeouts
    /// - [`ForwardError::Status`] on non-2xx replies
    /// - [`ForwardError::InvalidResponse`] if the reply lacks `logID`
    pub async fn forward(&self, entry: &LogEntry) -> Result<String, ForwardError> {
        let endpoint = self.endpoint.as_deref().ok_or(ForwardError::NotConfigured)?;

        let mut request = self
            .client
            .post(endpoint)
            .header(CONTENT_TYPE, "application/json")
            .json(entry);

        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("Bearer {}", token));
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<CollectorError>(&body)
                .map(|e| e.message)
                .unwrap_or(body);
            return Err(ForwardError::Status {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str::<CollectorResponse>(&body)
            .map(|r| r.log_id)
            .map_err(|e| ForwardError::InvalidResponse(e.to_string()))
    }
}

/// Writes an entry to the local diagnostic channel at its own severity.
fn log_locally(entry: &LogEntry) {
    let (stack, package, message) = (entry.stack, entry.package, &entry.message);

    match entry.level {
        Level::Debug => debug!(target: "remote_log", %stack, %package, "{}", message),
        Level::Info => info!(target: "remote_log", %stack, %package, "{}", message),
        Level::Warn => warn!(target: "remote_log", %stack, %package, "{}", message),
        Level::Error | Level::Fatal => {
            error!(target: "remote_log", %stack, %package, level = %entry.level, "{}", message)
        }
    }
}
