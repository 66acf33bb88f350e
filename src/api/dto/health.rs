//! DTOs for health check endpoint.

use serde::Serialize;

/// Health check response with store sizes.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub links: usize,
    pub clicks: usize,
}
