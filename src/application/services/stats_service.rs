//! Click statistics service.

use std::sync::Arc;

use crate::domain::entities::LinkStats;
use crate::domain::repositories::{LinkRepository, StoreTotals};
use crate::error::AppError;
use serde_json::json;

/// Service for reading click analytics.
///
/// Read-only: nothing here mutates the store. Expired links stay queryable.
pub struct StatsService<R: LinkRepository> {
    repository: Arc<R>,
}

impl<R: LinkRepository> StatsService<R> {
    /// Creates a new statistics service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Retrieves a link with its complete click log.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    pub async fn get_link_stats(&self, code: &str) -> Result<LinkStats, AppError> {
        self.repository
            .find_stats(code)
            .await?
            .ok_or_else(|| AppError::not_found("Shortcode not found.", json!({ "shortcode": code })))
    }

    /// Counts all links and clicks currently held.
    pub async fn totals(&self) -> Result<StoreTotals, AppError> {
        self.repository.totals().await
    }
}
