//! HTTP middleware for request processing.
//!
//! - [`tracing`] - Structured request/response spans
//! - [`access_log`] - Append-only request/response diagnostic file

pub mod access_log;
pub mod tracing;
