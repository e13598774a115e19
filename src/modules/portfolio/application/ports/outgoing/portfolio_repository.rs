use async_trait::async_trait;
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::modules::portfolio::domain::assemble::{BlockRow, PortfolioRow, ProjectRow};
use crate::shared::patch::PatchField;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct NewPortfolioRow {
    pub owner_id: Uuid,
    pub title: String,

    /// Resolved by the create flow; immutable after insert.
    pub slug: String,

    pub layout: String,
    pub is_published: bool,
    pub cv_id: Option<Uuid>,
    pub theme_id: Option<String>,
    pub custom_domain: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewProjectRow {
    pub portfolio_id: Uuid,
    pub title: String,
    pub description: String,
    pub media_url: Option<String>,
    pub repo_url: Option<String>,
    pub live_url: Option<String>,
    pub tech_stack: Vec<String>,
    pub is_featured: bool,
    pub sort_order: i32,
}

#[derive(Debug, Clone)]
pub struct NewBlockRow {
    pub portfolio_id: Uuid,
    pub kind: String,
    pub content: Map<String, Value>,
    pub sort_order: i32,
    pub is_visible: bool,
}

/// Patch semantics:
/// - title/layout/is_published: Unset => keep, Value => replace
/// - cv_id/theme_id/custom_domain: Unset => keep, Null => clear, Value => set
///
/// Every successful patch bumps `last_edited_at`.
#[derive(Debug, Clone, Default)]
pub struct UpdatePortfolioData {
    pub title: PatchField<String>,
    pub layout: PatchField<String>,
    pub is_published: PatchField<bool>,
    pub cv_id: PatchField<Uuid>,
    pub theme_id: PatchField<String>,
    pub custom_domain: PatchField<String>,
}

#[derive(Debug, Clone)]
pub struct PortfolioAggregateRows {
    pub portfolio: PortfolioRow,
    pub projects: Vec<ProjectRow>,
    pub blocks: Vec<BlockRow>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum PortfolioRepositoryError {
    #[error("Portfolio not found")]
    NotFound,

    /// Owner-scoped unique slug violated at INSERT time.
    #[error("Slug already exists")]
    SlugAlreadyExists,

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
pub trait PortfolioRepository: Send + Sync {
    async fn insert_portfolio(
        &self,
        data: NewPortfolioRow,
    ) -> Result<PortfolioRow, PortfolioRepositoryError>;

    /// Children insert one row at a time so a failed child never aborts
    /// its siblings.
    async fn insert_project(
        &self,
        data: NewProjectRow,
    ) -> Result<ProjectRow, PortfolioRepositoryError>;

    async fn insert_block(&self, data: NewBlockRow)
        -> Result<BlockRow, PortfolioRepositoryError>;

    async fn slug_exists(
        &self,
        owner_id: Uuid,
        slug: &str,
    ) -> Result<bool, PortfolioRepositoryError>;

    /// Newest-first by creation time.
    async fn list_by_owner(
        &self,
        owner_id: Uuid,
    ) -> Result<Vec<PortfolioRow>, PortfolioRepositoryError>;

    async fn find_portfolio(
        &self,
        portfolio_id: Uuid,
    ) -> Result<Option<PortfolioRow>, PortfolioRepositoryError>;

    async fn fetch_aggregate(
        &self,
        portfolio_id: Uuid,
    ) -> Result<Option<PortfolioAggregateRows>, PortfolioRepositoryError>;

    async fn update_portfolio(
        &self,
        portfolio_id: Uuid,
        data: UpdatePortfolioData,
    ) -> Result<PortfolioRow, PortfolioRepositoryError>;

    async fn delete_projects(&self, portfolio_id: Uuid)
        -> Result<(), PortfolioRepositoryError>;

    async fn delete_blocks(&self, portfolio_id: Uuid) -> Result<(), PortfolioRepositoryError>;

    /// Cascade clears projects and blocks.
    async fn delete_portfolio(&self, portfolio_id: Uuid)
        -> Result<(), PortfolioRepositoryError>;
}
