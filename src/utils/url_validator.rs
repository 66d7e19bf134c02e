//! Absolute URL validation.

use url::Url;

/// Returns true if `candidate` parses as an absolute URL with a non-empty host.
///
/// The string is not rewritten; callers store it exactly as submitted.
///
/// # Examples
///
/// ```ignore
/// assert!(is_valid_url("https://example.com/path?q=1"));
/// assert!(!is_valid_url("not-a-url"));
/// assert!(!is_valid_url("/relative/path"));
/// ```
pub fn is_valid_url(candidate: &str) -> bool {
    match Url::parse(candidate) {
        Ok(url) => url.host_str().is_some_and(|h| !h.is_empty()),
        Err(_) => false,
    }
}
