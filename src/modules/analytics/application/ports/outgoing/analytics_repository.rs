use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use uuid::Uuid;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct NewViewRow {
    pub portfolio_id: Uuid,
    pub visitor_hash: String,
    pub user_agent: String,
    pub referrer: String,
    pub device_type: String,
}

#[derive(Debug, Clone)]
pub struct NewEventRow {
    pub portfolio_id: Uuid,
    pub event_type: String,
    pub event_data: Map<String, Value>,
}

#[derive(Debug, Clone)]
pub struct ViewRow {
    pub id: Uuid,
    pub portfolio_id: Uuid,
    pub visitor_hash: String,
    pub user_agent: String,
    pub referrer: String,
    pub device_type: String,
    pub viewed_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct EventRow {
    pub id: Uuid,
    pub portfolio_id: Uuid,
    pub event_type: String,
    pub event_data: Map<String, Value>,
    pub created_at: DateTime<Utc>,
}

/// Denormalized lifetime counters, one row per portfolio.
#[derive(Debug, Clone)]
pub struct StatsRow {
    pub portfolio_id: Uuid,
    pub total_views: i64,
    pub total_events: i64,
    pub updated_at: DateTime<Utc>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum AnalyticsRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait AnalyticsRepository: Send + Sync {
    async fn insert_view(&self, data: NewViewRow) -> Result<(), AnalyticsRepositoryError>;

    async fn insert_event(&self, data: NewEventRow) -> Result<(), AnalyticsRepositoryError>;

    /// Counter bumps are read-modify-write without a transaction; a
    /// lost increment under concurrency is acceptable.
    async fn bump_view_count(&self, portfolio_id: Uuid)
        -> Result<(), AnalyticsRepositoryError>;

    async fn bump_event_count(
        &self,
        portfolio_id: Uuid,
    ) -> Result<(), AnalyticsRepositoryError>;

    async fn find_stats(
        &self,
        portfolio_id: Uuid,
    ) -> Result<Option<StatsRow>, AnalyticsRepositoryError>;

    /// Views recorded at or after `since`, oldest first.
    async fn views_since(
        &self,
        portfolio_id: Uuid,
        since: DateTime<Utc>,
    ) -> Result<Vec<ViewRow>, AnalyticsRepositoryError>;

    /// Newest first, bounded by `limit`.
    async fn recent_views(
        &self,
        portfolio_id: Uuid,
        limit: u64,
    ) -> Result<Vec<ViewRow>, AnalyticsRepositoryError>;

    /// Newest first, bounded by `limit`.
    async fn recent_events(
        &self,
        portfolio_id: Uuid,
        limit: u64,
    ) -> Result<Vec<EventRow>, AnalyticsRepositoryError>;
}
