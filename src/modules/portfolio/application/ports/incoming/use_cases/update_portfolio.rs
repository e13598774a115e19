use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::identity::application::policy::Principal;
use crate::modules::portfolio::domain::entities::{LayoutKind, PortfolioDocument};
use crate::shared::patch::PatchField;

use super::create_portfolio::{NewBlockInput, NewProjectInput, SkippedChild};

//
// ──────────────────────────────────────────────────────────
// Input
// ──────────────────────────────────────────────────────────
//

/// Patch semantics:
/// - title/layout/is_published: omitted => keep, null => rejected
/// - cv_id/theme_id/custom_domain: omitted => keep, null => clear
/// - projects/blocks: omitted => keep, array => replace the whole list
///
/// Publishing a portfolio is a plain `isPublished: true` patch.
/// Slug is immutable and MUST NOT be patchable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePortfolioInput {
    #[serde(default)]
    pub title: PatchField<String>,

    #[serde(default)]
    pub layout: PatchField<LayoutKind>,

    #[serde(default, rename = "isPublished")]
    pub is_published: PatchField<bool>,

    #[serde(default, rename = "cvId")]
    pub cv_id: PatchField<Uuid>,

    #[serde(default, rename = "themeId")]
    pub theme_id: PatchField<String>,

    #[serde(default, rename = "customDomain")]
    pub custom_domain: PatchField<String>,

    #[serde(default)]
    pub projects: Option<Vec<NewProjectInput>>,

    #[serde(default)]
    pub blocks: Option<Vec<NewBlockInput>>,
}

//
// ──────────────────────────────────────────────────────────
// Outcome
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize)]
pub struct UpdatePortfolioOutcome {
    #[serde(flatten)]
    pub document: PortfolioDocument,

    #[serde(rename = "skippedProjects", skip_serializing_if = "Vec::is_empty")]
    pub skipped_projects: Vec<SkippedChild>,

    #[serde(rename = "skippedBlocks", skip_serializing_if = "Vec::is_empty")]
    pub skipped_blocks: Vec<SkippedChild>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdatePortfolioError {
    /// Missing and foreign portfolios deny identically.
    #[error("Portfolio not found")]
    Unauthorized,

    /// Explicit null on a non-nullable field.
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Update failed: {0}")]
    UpdateFailed(String),
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait UpdatePortfolioUseCase: Send + Sync {
    async fn execute(
        &self,
        principal: Principal,
        portfolio_id: Uuid,
        input: UpdatePortfolioInput,
    ) -> Result<UpdatePortfolioOutcome, UpdatePortfolioError>;
}
