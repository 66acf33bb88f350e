//! Click entity representing a single redirect event.

use chrono::{DateTime, Utc};

/// A click recorded when a live shortened link is followed.
///
/// Click logs are append-only; their order is the order in which redirects
/// were served.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Click {
    pub clicked_at: DateTime<Utc>,
    pub referrer: Option<String>,
    pub ip: Option<String>,
}

impl Click {
    /// Creates a new Click instance.
    ///
    /// Metadata fields are optional: the `Referer` header may be absent and
    /// the peer address is unknown when the server runs without connect info.
    pub fn new(clicked_at: DateTime<Utc>, referrer: Option<String>, ip: Option<String>) -> Self {
        Self {
            clicked_at,
            referrer,
            ip,
        }
    }
}

/// Request metadata captured by the redirect handler.
///
/// The service stamps it with the current time to produce a [`Click`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewClick {
    pub referrer: Option<String>,
    pub ip: Option<String>,
}

impl NewClick {
    pub fn new(referrer: Option<&str>, ip: Option<String>) -> Self {
        Self {
            referrer: referrer.map(|s| s.to_string()),
            ip,
        }
    }

    /// Turns the metadata into a click observed at `clicked_at`.
    pub fn at(self, clicked_at: DateTime<Utc>) -> Click {
        Click::new(clicked_at, self.referrer, self.ip)
    }
}
