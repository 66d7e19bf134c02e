//! Remote log forwarding.
//!
//! Validates `(stack, level, package, message)` tuples and posts them to an
//! external collector with a bearer token taken from configuration. Delivery is
//! best-effort: nothing here ever returns an error to the code that logs.
//!
//! ```rust,ignore
//! let forwarder = LogForwarder::new(Some(url), Some(token), DEFAULT_TIMEOUT)?;
//! forwarder.log("backend", "info", "handler", "Short URL created").await;
//! forwarder.spawn(Stack::Backend, Level::Warn, Package::Route, "Alias expired");
//! ```

mod entry;
mod forwarder;

pub use entry::{Level, LogEntry, LogValidationError, Package, Stack};
pub use forwarder::{DEFAULT_TIMEOUT, ForwardError, LogForwarder};
