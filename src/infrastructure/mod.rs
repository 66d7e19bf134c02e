//! Infrastructure layer for external integrations.
//!
//! Implements the interfaces defined by the domain layer and talks to the
//! outside world.
//!
//! - [`storage`] - In-memory record and click stores
//! - [`remote_log`] - Best-effort forwarding to a remote log collector
//! - [`access_log`] - Append-only request/response diagnostic file

pub mod access_log;
pub mod remote_log;
pub mod storage;
