//! DTOs for link shortening endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a URL.
///
/// URL and shortcode format are checked by the service so that a bad value
/// always yields the same error regardless of the entry point.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten (must be an absolute HTTP/HTTPS URL).
    pub url: String,

    /// Lifetime in minutes. Defaults to 30 when omitted.
    #[validate(range(min = 0, max = 5_256_000, message = "Validity must be between 0 and 5256000 minutes"))]
    pub validity: Option<i64>,

    /// Optional custom shortcode.
    pub shortcode: Option<String>,
}

/// Response for a created short link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub short_link: String,

    #[serde(serialize_with = "crate::utils::timestamp::serialize")]
    pub expiry: DateTime<Utc>,
}
