//! Handler for link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Retrieves statistics for a specific short link.
///
/// # Endpoint
///
/// `GET /shorturls/{shortcode}`
///
/// # Response
///
/// ```json
/// {
///   "originalUrl": "https://example.com",
///   "createdAt": "2025-01-01T12:00:00.000000Z",
///   "expiry": "2025-01-01T12:30:00.000000Z",
///   "clickCount": 1,
///   "clicks": [
///     { "timestamp": "2025-01-01T12:05:00.000000Z", "referrer": null, "ip": "127.0.0.1" }
///   ]
/// }
/// ```
///
/// Expired links are still reported.
///
/// # Errors
///
/// Returns 404 Not Found if the shortcode doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(shortcode): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let stats = state.stats_service.get_link_stats(&shortcode).await?;

    Ok(Json(StatsResponse::from(stats)))
}
