//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

use super::click::Click;

/// A shortened URL with its validity window.
///
/// Links are immutable once stored. `expires_at` is never earlier than
/// `created_at`; a link created with zero validity has both equal and is
/// expired at any later instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        code: String,
        original_url: String,
        created_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            code,
            original_url,
            created_at,
            expires_at,
        }
    }

    /// Returns true if the link is no longer honored at `now`.
    ///
    /// The expiry instant itself is still valid; only strictly later
    /// instants are expired.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}

/// A link together with its full click log, in arrival order.
#[derive(Debug, Clone)]
pub struct LinkStats {
    pub link: Link,
    pub clicks: Vec<Click>,
}

impl LinkStats {
    /// Number of recorded clicks.
    pub fn click_count(&self) -> usize {
        self.clicks.len()
    }
}
