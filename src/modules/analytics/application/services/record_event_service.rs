use async_trait::async_trait;
use tracing::warn;

use crate::modules::analytics::application::ports::incoming::use_cases::{
    RecordEventError, RecordEventInput, RecordEventUseCase, RequestMeta,
};
use crate::modules::analytics::application::ports::outgoing::analytics_repository::{
    AnalyticsRepository, NewEventRow, NewViewRow,
};
use crate::modules::analytics::domain::classify::{
    classify_device, truncate_captured, visitor_hash,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct RecordEventService<A>
where
    A: AnalyticsRepository,
{
    analytics_repository: A,
}

impl<A> RecordEventService<A>
where
    A: AnalyticsRepository,
{
    pub fn new(analytics_repository: A) -> Self {
        Self {
            analytics_repository,
        }
    }
}

#[async_trait]
impl<A> RecordEventUseCase for RecordEventService<A>
where
    A: AnalyticsRepository + Send + Sync,
{
    async fn execute(
        &self,
        input: RecordEventInput,
        meta: RequestMeta,
    ) -> Result<(), RecordEventError> {
        let Some(portfolio_id) = input.portfolio_id else {
            return Err(RecordEventError::Validation(
                "portfolioId is required".to_string(),
            ));
        };

        if let Some(event_type) = input.event_type {
            self.analytics_repository
                .insert_event(NewEventRow {
                    portfolio_id,
                    event_type,
                    event_data: input.event_data.unwrap_or_default(),
                })
                .await
                .map_err(|e| RecordEventError::RecordFailed(e.to_string()))?;

            // Counter bump is best-effort; the event row is the source
            // of truth.
            if let Err(e) = self.analytics_repository.bump_event_count(portfolio_id).await {
                warn!(%portfolio_id, error = %e, "event counter bump failed");
            }
            return Ok(());
        }

        self.analytics_repository
            .insert_view(NewViewRow {
                portfolio_id,
                visitor_hash: visitor_hash(&meta.forwarded_for),
                user_agent: truncate_captured(&meta.user_agent),
                referrer: truncate_captured(&meta.referrer),
                device_type: classify_device(&meta.user_agent).as_str().to_string(),
            })
            .await
            .map_err(|e| RecordEventError::RecordFailed(e.to_string()))?;

        if let Err(e) = self.analytics_repository.bump_view_count(portfolio_id).await {
            warn!(%portfolio_id, error = %e, "view counter bump failed");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use uuid::Uuid;

    use crate::modules::analytics::application::ports::outgoing::analytics_repository::{
        AnalyticsRepositoryError, EventRow, StatsRow, ViewRow,
    };
    use chrono::{DateTime, Utc};

    #[derive(Default)]
    struct RecorderState {
        views: Vec<NewViewRow>,
        events: Vec<NewEventRow>,
        view_bumps: Vec<Uuid>,
        event_bumps: Vec<Uuid>,
        fail_bumps: bool,
        fail_inserts: bool,
    }

    #[derive(Default)]
    struct RecordingRepo {
        state: Mutex<RecorderState>,
    }

    #[async_trait]
    impl AnalyticsRepository for RecordingRepo {
        async fn insert_view(&self, data: NewViewRow) -> Result<(), AnalyticsRepositoryError> {
            let mut state = self.state.lock().unwrap();
            if state.fail_inserts {
                return Err(AnalyticsRepositoryError::DatabaseError("boom".to_string()));
            }
            state.views.push(data);
            Ok(())
        }

        async fn insert_event(
            &self,
            data: NewEventRow,
        ) -> Result<(), AnalyticsRepositoryError> {
            let mut state = self.state.lock().unwrap();
            if state.fail_inserts {
                return Err(AnalyticsRepositoryError::DatabaseError("boom".to_string()));
            }
            state.events.push(data);
            Ok(())
        }

        async fn bump_view_count(
            &self,
            portfolio_id: Uuid,
        ) -> Result<(), AnalyticsRepositoryError> {
            let mut state = self.state.lock().unwrap();
            if state.fail_bumps {
                return Err(AnalyticsRepositoryError::DatabaseError(
                    "counter boom".to_string(),
                ));
            }
            state.view_bumps.push(portfolio_id);
            Ok(())
        }

        async fn bump_event_count(
            &self,
            portfolio_id: Uuid,
        ) -> Result<(), AnalyticsRepositoryError> {
            let mut state = self.state.lock().unwrap();
            if state.fail_bumps {
                return Err(AnalyticsRepositoryError::DatabaseError(
                    "counter boom".to_string(),
                ));
            }
            state.event_bumps.push(portfolio_id);
            Ok(())
        }

        async fn find_stats(
            &self,
            _portfolio_id: Uuid,
        ) -> Result<Option<StatsRow>, AnalyticsRepositoryError> {
            unimplemented!()
        }

        async fn views_since(
            &self,
            _portfolio_id: Uuid,
            _since: DateTime<Utc>,
        ) -> Result<Vec<ViewRow>, AnalyticsRepositoryError> {
            unimplemented!()
        }

        async fn recent_views(
            &self,
            _portfolio_id: Uuid,
            _limit: u64,
        ) -> Result<Vec<ViewRow>, AnalyticsRepositoryError> {
            unimplemented!()
        }

        async fn recent_events(
            &self,
            _portfolio_id: Uuid,
            _limit: u64,
        ) -> Result<Vec<EventRow>, AnalyticsRepositoryError> {
            unimplemented!()
        }
    }

    fn view_input(portfolio_id: Uuid) -> RecordEventInput {
        RecordEventInput {
            portfolio_id: Some(portfolio_id),
            event_type: None,
            event_data: None,
        }
    }

    #[tokio::test]
    async fn missing_portfolio_id_is_a_validation_error() {
        let svc = RecordEventService::new(RecordingRepo::default());

        let err = svc
            .execute(
                RecordEventInput {
                    portfolio_id: None,
                    event_type: None,
                    event_data: None,
                },
                RequestMeta::default(),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, RecordEventError::Validation(_)));
    }

    #[tokio::test]
    async fn page_view_captures_classified_metadata() {
        let portfolio_id = Uuid::new_v4();
        let svc = RecordEventService::new(RecordingRepo::default());

        svc.execute(
            view_input(portfolio_id),
            RequestMeta {
                user_agent: "Mozilla/5.0 (iPhone) Mobile Safari".to_string(),
                referrer: "https://example.com/feed".to_string(),
                forwarded_for: "203.0.113.7".to_string(),
            },
        )
        .await
        .unwrap();

        let state = svc.analytics_repository.state.lock().unwrap();
        assert_eq!(state.views.len(), 1);
        assert_eq!(state.views[0].device_type, "mobile");
        assert_eq!(state.views[0].referrer, "https://example.com/feed");
        assert_eq!(state.views[0].visitor_hash.len(), 16);
        assert_eq!(state.view_bumps, vec![portfolio_id]);
        assert!(state.events.is_empty());
    }

    #[tokio::test]
    async fn event_type_routes_to_an_event_row() {
        let portfolio_id = Uuid::new_v4();
        let svc = RecordEventService::new(RecordingRepo::default());

        svc.execute(
            RecordEventInput {
                portfolio_id: Some(portfolio_id),
                event_type: Some("contact_click".to_string()),
                event_data: None,
            },
            RequestMeta::default(),
        )
        .await
        .unwrap();

        let state = svc.analytics_repository.state.lock().unwrap();
        assert_eq!(state.events.len(), 1);
        assert_eq!(state.events[0].event_type, "contact_click");
        assert_eq!(state.event_bumps, vec![portfolio_id]);
        assert!(state.views.is_empty());
    }

    #[tokio::test]
    async fn failed_counter_bump_does_not_fail_the_record() {
        let repo = RecordingRepo::default();
        repo.state.lock().unwrap().fail_bumps = true;
        let svc = RecordEventService::new(repo);

        svc.execute(view_input(Uuid::new_v4()), RequestMeta::default())
            .await
            .unwrap();

        assert_eq!(svc.analytics_repository.state.lock().unwrap().views.len(), 1);
    }

    #[tokio::test]
    async fn storage_failure_collapses_to_a_generic_error() {
        let repo = RecordingRepo::default();
        repo.state.lock().unwrap().fail_inserts = true;
        let svc = RecordEventService::new(repo);

        let err = svc
            .execute(view_input(Uuid::new_v4()), RequestMeta::default())
            .await
            .unwrap_err();

        assert!(matches!(err, RecordEventError::RecordFailed(_)));
    }
}
