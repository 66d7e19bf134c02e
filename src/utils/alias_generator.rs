//! Random alias generation.
//!
//! Produces short alphanumeric codes; collision handling against the record
//! store is done by the caller.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Number of characters in a generated alias.
pub const ALIAS_LENGTH: usize = 6;

/// Default bound on regeneration attempts when a candidate is already taken.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

/// Generates a random alias of [`ALIAS_LENGTH`] characters from `[A-Za-z0-9]`.
///
/// # Examples
///
/// ```ignore
/// let alias = generate_alias();
/// assert_eq!(alias.len(), 6);
/// assert!(alias.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_alias() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(ALIAS_LENGTH)
        .map(char::from)
        .collect()
}
