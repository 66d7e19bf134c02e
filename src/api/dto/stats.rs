//! DTOs for per-alias statistics and the alias listing.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::services::ShortUrlStats;
use crate::domain::entities::Click;
use crate::utils::timestamp;

/// Statistics for one alias.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub shortlink: String,
    pub original_url: String,
    #[serde(serialize_with = "timestamp::serialize")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "timestamp::serialize")]
    pub expiry: DateTime<Utc>,
    pub total_clicks: usize,
    pub click_data: Vec<ClickInfo>,
}

impl StatsResponse {
    pub fn new(shortlink: String, stats: ShortUrlStats) -> Self {
        Self {
            shortlink,
            total_clicks: stats.total_clicks(),
            original_url: stats.record.original_url,
            created_at: stats.record.created_at,
            expiry: stats.record.expires_at,
            click_data: stats.clicks.into_iter().map(ClickInfo::from).collect(),
        }
    }
}

/// One recorded click.
#[derive(Debug, Serialize)]
pub struct ClickInfo {
    #[serde(serialize_with = "timestamp::serialize")]
    pub timestamp: DateTime<Utc>,
    pub referrer: String,
    pub location: String,
}

impl From<Click> for ClickInfo {
    fn from(click: Click) -> Self {
        Self {
            timestamp: click.timestamp,
            referrer: click.referrer,
            location: click.location,
        }
    }
}

/// Every alias currently in the record store.
#[derive(Debug, Serialize)]
pub struct AliasListResponse {
    pub shortcodes: Vec<String>,
}
