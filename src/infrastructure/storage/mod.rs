//! In-memory store implementations.
//!
//! Data lives for the lifetime of the process; nothing is persisted.

mod click_store;
mod short_url_store;

pub use click_store::InMemoryClickRepository;
pub use short_url_store::InMemoryShortUrlRepository;
