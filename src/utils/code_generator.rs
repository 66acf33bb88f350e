//! Shortcode generation and validation utilities.
//!
//! Generated codes are random ASCII alphanumerics. Any code, generated or
//! user-supplied, must match `^[a-zA-Z0-9]{4,}$` before it is stored.

use crate::error::AppError;
use rand::{Rng, distr::Alphanumeric};
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

/// Length of generated codes unless configured otherwise.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Shortest code accepted by [`validate_shortcode`].
pub const MIN_CODE_LENGTH: usize = 4;

/// Compiled regex for shortcode validation.
static SHORTCODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]{4,}$").expect("shortcode regex is valid"));

/// Codes that collide with fixed routes and could never be redirected.
const RESERVED_CODES: &[&str] = &["shorturls", "health"];

/// Generates a random alphanumeric shortcode of `length` characters.
///
/// Uniqueness is not guaranteed; callers must check against the store.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code(6);
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code(length: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Validates a shortcode.
///
/// # Rules
///
/// - ASCII letters and digits only
/// - At least 4 characters
/// - Not a reserved route segment
///
/// # Errors
///
/// Returns [`AppError::Validation`] with the message
/// `"Invalid shortcode format."` if any rule is violated.
pub fn validate_shortcode(code: &str) -> Result<(), AppError> {
    if !SHORTCODE_REGEX.is_match(code) {
        return Err(AppError::bad_request(
            "Invalid shortcode format.",
            json!({
                "shortcode": code,
                "pattern": SHORTCODE_REGEX.as_str(),
            }),
        ));
    }

    if RESERVED_CODES.contains(&code) {
        return Err(AppError::bad_request(
            "Invalid shortcode format.",
            json!({ "shortcode": code, "reason": "reserved" }),
        ));
    }

    Ok(())
}
