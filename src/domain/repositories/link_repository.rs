//! Repository trait for short link and click data access.

use crate::domain::entities::{Click, Link, LinkStats};
use crate::error::AppError;
use async_trait::async_trait;

/// Aggregate sizes of the store, reported by the health endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreTotals {
    pub links: usize,
    pub clicks: usize,
}

/// Outcome of recording a redirect against a shortcode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The link was live at the click instant and the click was appended.
    Recorded(Link),
    /// The link was past its expiry at the click instant; nothing was appended.
    Expired(Link),
    /// No link exists for the code.
    Missing,
}

/// Repository interface for links and their click logs.
///
/// Implementations must make each method atomic with respect to the others:
/// two concurrent inserts of the same code can never both succeed, and a
/// click is never appended to a code whose link is missing or expired.
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::InMemoryStore`] - process-local tables
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Stores a new link and starts an empty click log for it.
    ///
    /// Existing entries are never overwritten.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the code is already taken.
    async fn insert(&self, link: Link) -> Result<(), AppError>;

    /// Finds a link by its shortcode.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if not found
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Appends `click` to the code's click log if the link is live at
    /// `click.clicked_at`.
    ///
    /// The lookup, the expiry check and the append happen as one step, so
    /// the log only ever grows for links that were live when visited.
    async fn record_click(&self, code: &str, click: Click) -> Result<ClickOutcome, AppError>;

    /// Returns the link and a snapshot of its click log.
    async fn find_stats(&self, code: &str) -> Result<Option<LinkStats>, AppError>;

    /// Counts stored links and recorded clicks.
    async fn totals(&self) -> Result<StoreTotals, AppError>;
}
