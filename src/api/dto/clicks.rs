//! DTOs for click records.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Click;

/// Individual click as reported by the stats endpoint.
///
/// Unknown referrer or address serialize as `null`.
#[derive(Debug, Serialize)]
pub struct ClickInfo {
    #[serde(serialize_with = "crate::utils::timestamp::serialize")]
    pub timestamp: DateTime<Utc>,
    pub referrer: Option<String>,
    pub ip: Option<String>,
}

impl From<Click> for ClickInfo {
    fn from(click: Click) -> Self {
        Self {
            timestamp: click.clicked_at,
            referrer: click.referrer,
            ip: click.ip,
        }
    }
}
