use std::sync::Arc;

use super::ports::incoming::use_cases::{GetStatsUseCase, RecordEventUseCase};

/// Handle bundle injected into the web layer.
#[derive(Clone)]
pub struct AnalyticsUseCases {
    pub record: Arc<dyn RecordEventUseCase + Send + Sync>,
    pub stats: Arc<dyn GetStatsUseCase + Send + Sync>,
}
