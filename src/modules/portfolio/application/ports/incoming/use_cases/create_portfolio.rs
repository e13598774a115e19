use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::modules::identity::application::policy::Principal;
use crate::modules::portfolio::domain::entities::{BlockKind, LayoutKind, PortfolioDocument};

//
// ──────────────────────────────────────────────────────────
// Input
// ──────────────────────────────────────────────────────────
//

/// Stored order is the array index in the request, never a
/// client-supplied field.
#[derive(Debug, Clone, Deserialize)]
pub struct NewProjectInput {
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default, rename = "mediaUrl")]
    pub media_url: Option<String>,

    #[serde(default, rename = "repoUrl")]
    pub repo_url: Option<String>,

    #[serde(default, rename = "liveUrl")]
    pub live_url: Option<String>,

    #[serde(default, rename = "techStack")]
    pub tech_stack: Vec<String>,

    #[serde(default = "default_true", rename = "isFeatured")]
    pub is_featured: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewBlockInput {
    #[serde(rename = "type")]
    pub kind: BlockKind,

    #[serde(default)]
    pub content: Map<String, Value>,

    #[serde(default = "default_true", rename = "isVisible")]
    pub is_visible: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePortfolioInput {
    pub title: String,

    #[serde(default)]
    pub layout: LayoutKind,

    #[serde(default, rename = "isPublished")]
    pub is_published: bool,

    #[serde(default, rename = "cvId")]
    pub cv_id: Option<Uuid>,

    #[serde(default, rename = "themeId")]
    pub theme_id: Option<String>,

    #[serde(default, rename = "customDomain")]
    pub custom_domain: Option<String>,

    #[serde(default)]
    pub projects: Vec<NewProjectInput>,

    #[serde(default)]
    pub blocks: Vec<NewBlockInput>,
}

//
// ──────────────────────────────────────────────────────────
// Outcome
// ──────────────────────────────────────────────────────────
//

/// A child row (project or block) that failed to insert. Children are
/// best-effort; the parent row is strict.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedChild {
    /// Index in the request's projects or blocks array.
    pub index: usize,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreatePortfolioOutcome {
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
pub enum CreatePortfolioError {
    /// Storage failed on the parent portfolio row.
    #[error("Creation failed: {0}")]
    CreationFailed(String),
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreatePortfolioUseCase: Send + Sync {
    async fn execute(
        &self,
        principal: Principal,
        input: CreatePortfolioInput,
    ) -> Result<CreatePortfolioOutcome, CreatePortfolioError>;
}
