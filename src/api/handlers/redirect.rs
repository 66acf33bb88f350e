//! Handler for short URL redirect.

use axum::{
    extract::{ConnectInfo, Path, Request, State},
    http::header,
    response::{IntoResponse, Redirect},
};
use std::net::SocketAddr;

use crate::domain::entities::NewClick;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a shortcode to its original URL.
///
/// # Endpoint
///
/// `GET /{shortcode}`
///
/// # Request Flow
///
/// 1. Look up the shortcode
/// 2. Reject it if the link is past its expiry
/// 3. Record a click with the `Referer` header and peer address
/// 4. Return 307 Temporary Redirect
///
/// The peer address is only known when the server is started with connect
/// info; otherwise the click is recorded without one.
///
/// # Errors
///
/// Returns 404 Not Found if the shortcode doesn't exist.
/// Returns 410 Gone if the link has expired.
pub async fn redirect_handler(
    State(state): State<AppState>,
    Path(shortcode): Path<String>,
    request: Request,
) -> Result<impl IntoResponse, AppError> {
    let referrer = request
        .headers()
        .get(header::REFERER)
        .and_then(|v| v.to_str().ok());

    let ip = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string());

    let link = state
        .link_service
        .resolve(&shortcode, NewClick::new(referrer, ip))
        .await?;

    Ok(Redirect::temporary(&link.original_url))
}
