//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one route.

pub mod create;
pub mod list;
pub mod redirect;
pub mod root;
pub mod stats;

pub use create::create_handler;
pub use list::list_handler;
pub use redirect::redirect_handler;
pub use root::root_handler;
pub use stats::stats_handler;
