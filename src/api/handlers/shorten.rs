//! Handler for link shortening endpoint.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for a long URL.
///
/// # Endpoint
///
/// `POST /shorturls`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com",
///   "validity": 30,        // optional, minutes
///   "shortcode": "abcd"    // optional
/// }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "shortLink": "http://localhost:8000/abcd",
///   "expiry": "2025-01-01T12:30:00.000000Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for a malformed URL, validity or shortcode.
/// Returns 409 Conflict if the requested shortcode already exists.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    payload.validate()?;

    let link = state
        .link_service
        .shorten(payload.url, payload.validity, payload.shortcode)
        .await?;

    let response = ShortenResponse {
        short_link: state.link_service.short_url(&link.code),
        expiry: link.expires_at,
    };

    Ok((StatusCode::CREATED, Json(response)))
}
