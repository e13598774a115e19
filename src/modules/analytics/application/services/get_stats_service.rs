use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::modules::analytics::application::ports::incoming::use_cases::{
    DailyViewCount, DeviceCount, GetStatsError, GetStatsUseCase, RecentEvent, RecentView,
    ReferrerCount, StatsSnapshot,
};
use crate::modules::analytics::application::ports::outgoing::analytics_repository::{
    AnalyticsRepository, ViewRow,
};
use crate::modules::analytics::domain::classify::referrer_domain;
use crate::modules::identity::application::policy::{
    authorize, AccessDecision, DocumentAction, Principal,
};
use crate::modules::portfolio::application::ports::outgoing::portfolio_repository::PortfolioRepository;

/// Trailing window for the daily series and breakdowns.
const WINDOW_DAYS: i64 = 7;

const TOP_REFERRERS: usize = 5;
const RECENT_VIEWS: u64 = 100;
const RECENT_EVENTS: u64 = 50;

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct GetStatsService<A, R>
where
    A: AnalyticsRepository,
    R: PortfolioRepository,
{
    analytics_repository: A,
    portfolio_repository: R,
}

impl<A, R> GetStatsService<A, R>
where
    A: AnalyticsRepository,
    R: PortfolioRepository,
{
    pub fn new(analytics_repository: A, portfolio_repository: R) -> Self {
        Self {
            analytics_repository,
            portfolio_repository,
        }
    }
}

fn daily_series(views: &[ViewRow]) -> Vec<DailyViewCount> {
    let today = Utc::now().date_naive();
    let mut per_day: HashMap<_, u64> = HashMap::new();
    for view in views {
        *per_day.entry(view.viewed_at.date_naive()).or_default() += 1;
    }

    // Every trailing day appears, zero or not, oldest first.
    (0..WINDOW_DAYS)
        .rev()
        .map(|back| {
            let date = today - Duration::days(back);
            DailyViewCount {
                date,
                count: per_day.get(&date).copied().unwrap_or(0),
            }
        })
        .collect()
}

fn device_breakdown(views: &[ViewRow]) -> Vec<DeviceCount> {
    let mut per_device: HashMap<&str, u64> = HashMap::new();
    for view in views {
        *per_device.entry(view.device_type.as_str()).or_default() += 1;
    }

    let mut breakdown: Vec<DeviceCount> = per_device
        .into_iter()
        .map(|(device, count)| DeviceCount {
            device: device.to_string(),
            count,
        })
        .collect();
    breakdown.sort_by(|a, b| b.count.cmp(&a.count).then(a.device.cmp(&b.device)));
    breakdown
}

fn top_referrers(views: &[ViewRow]) -> Vec<ReferrerCount> {
    let mut per_domain: HashMap<String, u64> = HashMap::new();
    for view in views {
        // Malformed referrers are silently excluded
        if let Some(domain) = referrer_domain(&view.referrer) {
            *per_domain.entry(domain).or_default() += 1;
        }
    }

    let mut ranked: Vec<ReferrerCount> = per_domain
        .into_iter()
        .map(|(domain, count)| ReferrerCount { domain, count })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count).then(a.domain.cmp(&b.domain)));
    ranked.truncate(TOP_REFERRERS);
    ranked
}

#[async_trait]
impl<A, R> GetStatsUseCase for GetStatsService<A, R>
where
    A: AnalyticsRepository + Send + Sync,
    R: PortfolioRepository + Send + Sync,
{
    async fn execute(
        &self,
        principal: Principal,
        portfolio_id: Uuid,
    ) -> Result<StatsSnapshot, GetStatsError> {
        let owner_id = self
            .portfolio_repository
            .find_portfolio(portfolio_id)
            .await
            .map_err(|e| GetStatsError::RepositoryError(e.to_string()))?
            .map(|p| p.owner_id);

        match authorize(&principal, DocumentAction::ReadOwned { owner_id }) {
            AccessDecision::Allowed if owner_id.is_some() => {}
            _ => return Err(GetStatsError::Forbidden),
        }

        let stats = self
            .analytics_repository
            .find_stats(portfolio_id)
            .await
            .map_err(|e| GetStatsError::RepositoryError(e.to_string()))?;

        let since = Utc::now() - Duration::days(WINDOW_DAYS - 1);
        let windowed = self
            .analytics_repository
            .views_since(portfolio_id, since)
            .await
            .map_err(|e| GetStatsError::RepositoryError(e.to_string()))?;

        let recent_views = self
            .analytics_repository
            .recent_views(portfolio_id, RECENT_VIEWS)
            .await
            .map_err(|e| GetStatsError::RepositoryError(e.to_string()))?;

        let recent_events = self
            .analytics_repository
            .recent_events(portfolio_id, RECENT_EVENTS)
            .await
            .map_err(|e| GetStatsError::RepositoryError(e.to_string()))?;

        let (total_views, total_events) = stats
            .map(|s| (s.total_views, s.total_events))
            .unwrap_or((0, 0));

        Ok(StatsSnapshot {
            total_views,
            total_events,
            daily_views: daily_series(&windowed),
            device_breakdown: device_breakdown(&windowed),
            top_referrers: top_referrers(&windowed),
            recent_views: recent_views
                .into_iter()
                .map(|v| RecentView {
                    device_type: v.device_type,
                    referrer: v.referrer,
                    viewed_at: v.viewed_at,
                })
                .collect(),
            recent_events: recent_events
                .into_iter()
                .map(|e| RecentEvent {
                    event_type: e.event_type,
                    event_data: e.event_data,
                    created_at: e.created_at,
                })
                .collect(),
        })
    }
}
