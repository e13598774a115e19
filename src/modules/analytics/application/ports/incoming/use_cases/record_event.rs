use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Map, Value};
use uuid::Uuid;

//
// ──────────────────────────────────────────────────────────
// Input
// ──────────────────────────────────────────────────────────
//

/// Body of a tracking beacon. No authentication: published portfolio
/// pages call this from the visitor's browser.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordEventInput {
    #[serde(default, rename = "portfolioId")]
    pub portfolio_id: Option<Uuid>,

    /// Present for interaction events; absent for plain page views.
    #[serde(default, rename = "eventType")]
    pub event_type: Option<String>,

    #[serde(default, rename = "eventData")]
    pub event_data: Option<Map<String, Value>>,
}

/// Request metadata lifted from HTTP headers by the adapter.
#[derive(Debug, Clone, Default)]
pub struct RequestMeta {
    pub user_agent: String,
    pub referrer: String,
    pub forwarded_for: String,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum RecordEventError {
    #[error("Validation error: {0}")]
    Validation(String),

    /// All storage failures collapse to this; the instrumented page
    /// never learns more.
    #[error("Recording failed")]
    RecordFailed(String),
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait RecordEventUseCase: Send + Sync {
    async fn execute(
        &self,
        input: RecordEventInput,
        meta: RequestMeta,
    ) -> Result<(), RecordEventError>;
}
