//! Target URL validation.

use url::Url;

/// Errors that can occur while validating a target URL.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TargetUrlError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must include a host")]
    MissingHost,

    #[error("URL must not contain control characters or surrounding whitespace")]
    UnsafeCharacters,
}

/// Checks that `input` is an absolute `http` or `https` URL with a host.
///
/// The URL is not rewritten; callers keep the string exactly as submitted.
/// `Url::parse` silently drops tabs, newlines and surrounding whitespace, so
/// such input is rejected up front: the stored string must be usable as a
/// `Location` header verbatim.
///
/// # Errors
///
/// Returns [`TargetUrlError::InvalidFormat`] for unparsable or relative URLs,
/// [`TargetUrlError::UnsupportedProtocol`] for other schemes such as
/// `javascript:` or `ftp:`, [`TargetUrlError::MissingHost`] when the
/// authority is empty, and [`TargetUrlError::UnsafeCharacters`] for control
/// characters anywhere or whitespace at either end.
pub fn validate_target_url(input: &str) -> Result<(), TargetUrlError> {
    if input.trim() != input || input.chars().any(char::is_control) {
        return Err(TargetUrlError::UnsafeCharacters);
    }

    let url = Url::parse(input).map_err(|e| TargetUrlError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(TargetUrlError::UnsupportedProtocol),
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(TargetUrlError::MissingHost),
    }
}
