use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::modules::identity::application::policy::Principal;

//
// ──────────────────────────────────────────────────────────
// Snapshot
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize)]
pub struct DailyViewCount {
    pub date: NaiveDate,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeviceCount {
    pub device: String,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReferrerCount {
    pub domain: String,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecentView {
    #[serde(rename = "deviceType")]
    pub device_type: String,
    pub referrer: String,
    #[serde(rename = "viewedAt")]
    pub viewed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecentEvent {
    #[serde(rename = "eventType")]
    pub event_type: String,
    #[serde(rename = "eventData")]
    pub event_data: Map<String, Value>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Owner-facing analytics rollup. Counters fall back to zero when no
/// stats row exists yet; the daily series always holds 7 entries.
#[derive(Debug, Clone, Serialize)]
pub struct StatsSnapshot {
    #[serde(rename = "totalViews")]
    pub total_views: i64,

    #[serde(rename = "totalEvents")]
    pub total_events: i64,

    /// Oldest day first, today last.
    #[serde(rename = "dailyViews")]
    pub daily_views: Vec<DailyViewCount>,

    #[serde(rename = "deviceBreakdown")]
    pub device_breakdown: Vec<DeviceCount>,

    /// Top 5 referrer domains over the trailing window.
    #[serde(rename = "topReferrers")]
    pub top_referrers: Vec<ReferrerCount>,

    #[serde(rename = "recentViews")]
    pub recent_views: Vec<RecentView>,

    #[serde(rename = "recentEvents")]
    pub recent_events: Vec<RecentEvent>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetStatsError {
    /// Not the owner, or the portfolio does not exist.
    #[error("Not your portfolio")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait GetStatsUseCase: Send + Sync {
    async fn execute(
        &self,
        principal: Principal,
        portfolio_id: Uuid,
    ) -> Result<StatsSnapshot, GetStatsError>;
}
