//! DTOs for link statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::clicks::ClickInfo;
use crate::domain::entities::LinkStats;

/// Statistics for a specific short link.
///
/// Includes link metadata, click count and every click in arrival order.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub original_url: String,

    #[serde(serialize_with = "crate::utils::timestamp::serialize")]
    pub created_at: DateTime<Utc>,

    #[serde(serialize_with = "crate::utils::timestamp::serialize")]
    pub expiry: DateTime<Utc>,

    pub click_count: usize,
    pub clicks: Vec<ClickInfo>,
}

impl From<LinkStats> for StatsResponse {
    fn from(stats: LinkStats) -> Self {
        Self {
            click_count: stats.click_count(),
            original_url: stats.link.original_url,
            created_at: stats.link.created_at,
            expiry: stats.link.expires_at,
            clicks: stats.clicks.into_iter().map(ClickInfo::from).collect(),
        }
    }
}
