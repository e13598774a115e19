use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::analytics::adapter::outgoing::sea_orm_entity::{
    portfolio_events, portfolio_stats, portfolio_views,
};
use crate::modules::analytics::application::ports::outgoing::analytics_repository::{
    AnalyticsRepository, AnalyticsRepositoryError, EventRow, NewEventRow, NewViewRow, StatsRow,
    ViewRow,
};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct AnalyticsRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AnalyticsRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn load_stats(
        &self,
        portfolio_id: Uuid,
    ) -> Result<Option<portfolio_stats::Model>, AnalyticsRepositoryError> {
        portfolio_stats::Entity::find_by_id(portfolio_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)
    }
}

#[async_trait]
impl AnalyticsRepository for AnalyticsRepositoryPostgres {
    async fn insert_view(&self, data: NewViewRow) -> Result<(), AnalyticsRepositoryError> {
        let model = portfolio_views::ActiveModel {
            id: Set(Uuid::new_v4()),
            portfolio_id: Set(data.portfolio_id),
            visitor_hash: Set(data.visitor_hash),
            user_agent: Set(data.user_agent),
            referrer: Set(data.referrer),
            device_type: Set(data.device_type),
            viewed_at: Set(Utc::now().fixed_offset()),
        };

        model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(())
    }

    async fn insert_event(&self, data: NewEventRow) -> Result<(), AnalyticsRepositoryError> {
        let model = portfolio_events::ActiveModel {
            id: Set(Uuid::new_v4()),
            portfolio_id: Set(data.portfolio_id),
            event_type: Set(data.event_type),
            event_data: Set(Value::Object(data.event_data)),
            created_at: Set(Utc::now().fixed_offset()),
        };

        model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(())
    }

    // Read-modify-write; a lost increment under concurrent beacons is
    // acceptable for a denormalized counter.
    async fn bump_view_count(
        &self,
        portfolio_id: Uuid,
    ) -> Result<(), AnalyticsRepositoryError> {
        let now = Utc::now().fixed_offset();

        match self.load_stats(portfolio_id).await? {
            Some(existing) => {
                let model = portfolio_stats::ActiveModel {
                    portfolio_id: Set(portfolio_id),
                    total_views: Set(existing.total_views + 1),
                    total_events: Set(existing.total_events),
                    updated_at: Set(now),
                };
                model.update(&*self.db).await.map_err(map_db_err)?;
            }
            None => {
                let model = portfolio_stats::ActiveModel {
                    portfolio_id: Set(portfolio_id),
                    total_views: Set(1),
                    total_events: Set(0),
                    updated_at: Set(now),
                };
                model.insert(&*self.db).await.map_err(map_db_err)?;
            }
        }

        Ok(())
    }

    async fn bump_event_count(
        &self,
        portfolio_id: Uuid,
    ) -> Result<(), AnalyticsRepositoryError> {
        let now = Utc::now().fixed_offset();

        match self.load_stats(portfolio_id).await? {
            Some(existing) => {
                let model = portfolio_stats::ActiveModel {
                    portfolio_id: Set(portfolio_id),
                    total_views: Set(existing.total_views),
                    total_events: Set(existing.total_events + 1),
                    updated_at: Set(now),
                };
                model.update(&*self.db).await.map_err(map_db_err)?;
            }
            None => {
                let model = portfolio_stats::ActiveModel {
                    portfolio_id: Set(portfolio_id),
                    total_views: Set(0),
                    total_events: Set(1),
                    updated_at: Set(now),
                };
                model.insert(&*self.db).await.map_err(map_db_err)?;
            }
        }

        Ok(())
    }

    async fn find_stats(
        &self,
        portfolio_id: Uuid,
    ) -> Result<Option<StatsRow>, AnalyticsRepositoryError> {
        Ok(self.load_stats(portfolio_id).await?.map(|m| StatsRow {
            portfolio_id: m.portfolio_id,
            total_views: m.total_views,
            total_events: m.total_events,
            updated_at: m.updated_at.into(),
        }))
    }

    async fn views_since(
        &self,
        portfolio_id: Uuid,
        since: DateTime<Utc>,
    ) -> Result<Vec<ViewRow>, AnalyticsRepositoryError> {
        let models = portfolio_views::Entity::find()
            .filter(portfolio_views::Column::PortfolioId.eq(portfolio_id))
            .filter(portfolio_views::Column::ViewedAt.gte(since.fixed_offset()))
            .order_by_asc(portfolio_views::Column::ViewedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(model_to_view_row).collect())
    }

    async fn recent_views(
        &self,
        portfolio_id: Uuid,
        limit: u64,
    ) -> Result<Vec<ViewRow>, AnalyticsRepositoryError> {
        let models = portfolio_views::Entity::find()
            .filter(portfolio_views::Column::PortfolioId.eq(portfolio_id))
            .order_by_desc(portfolio_views::Column::ViewedAt)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(model_to_view_row).collect())
    }

    async fn recent_events(
        &self,
        portfolio_id: Uuid,
        limit: u64,
    ) -> Result<Vec<EventRow>, AnalyticsRepositoryError> {
        let models = portfolio_events::Entity::find()
            .filter(portfolio_events::Column::PortfolioId.eq(portfolio_id))
            .order_by_desc(portfolio_events::Column::CreatedAt)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(model_to_event_row).collect())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_view_row(model: portfolio_views::Model) -> ViewRow {
    ViewRow {
        id: model.id,
        portfolio_id: model.portfolio_id,
        visitor_hash: model.visitor_hash,
        user_agent: model.user_agent,
        referrer: model.referrer,
        device_type: model.device_type,
        viewed_at: model.viewed_at.into(),
    }
}

fn model_to_event_row(model: portfolio_events::Model) -> EventRow {
    // Non-object payloads read back as empty rather than failing the
    // whole rollup.
    let event_data = match model.event_data {
        Value::Object(map) => map,
        _ => serde_json::Map::new(),
    };

    EventRow {
        id: model.id,
        portfolio_id: model.portfolio_id,
        event_type: model.event_type,
        event_data,
        created_at: model.created_at.into(),
    }
}

fn map_db_err(e: DbErr) -> AnalyticsRepositoryError {
    AnalyticsRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
