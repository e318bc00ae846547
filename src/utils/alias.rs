//! Alias generation and validation utilities.
//!
//! Random aliases are drawn from an alphanumeric alphabet, which is a strict
//! subset of what [`is_valid_alias`] accepts, so every generated alias passes
//! validation.

use rand::Rng;
use regex::Regex;
use std::sync::LazyLock;

/// Default length of generated aliases.
pub const DEFAULT_ALIAS_LENGTH: usize = 4;

/// Characters used for generated aliases.
const ALIAS_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Compiled regex for alias validation.
static ALIAS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_]+$").expect("alias regex is valid"));

/// Generates a random alias of exactly `length` characters.
///
/// Uses the thread-local RNG. Not suitable for secrets; uniqueness is checked
/// by the caller against the store.
///
/// # Examples
///
/// ```
/// use url_alias::utils::alias::{generate_alias, is_valid_alias};
///
/// let alias = generate_alias(4);
/// assert_eq!(alias.len(), 4);
/// assert!(is_valid_alias(&alias));
/// ```
pub fn generate_alias(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..ALIAS_CHARSET.len());
            ALIAS_CHARSET[idx] as char
        })
        .collect()
}

/// Returns `true` if `alias` is non-empty and contains only ASCII letters,
/// digits and underscores.
///
/// # Examples
///
/// ```
/// use url_alias::utils::alias::is_valid_alias;
///
/// assert!(is_valid_alias("abc_123"));
/// assert!(!is_valid_alias(""));
/// assert!(!is_valid_alias("ab c"));
/// assert!(!is_valid_alias("héllo"));
/// ```
pub fn is_valid_alias(alias: &str) -> bool {
    ALIAS_REGEX.is_match(alias)
}
