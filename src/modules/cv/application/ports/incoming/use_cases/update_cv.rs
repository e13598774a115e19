use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::cv::domain::entities::CvDocument;
use crate::modules::identity::application::policy::Principal;
use crate::shared::patch::PatchField;

use super::create_cv::{NewSectionInput, SkippedItem, SkippedSection};

//
// ──────────────────────────────────────────────────────────
// Input
// ──────────────────────────────────────────────────────────
//

/// Patch semantics:
/// - title/language/template_id/is_public: omitted => keep, null => rejected
/// - theme_id: omitted => keep, null => clear, value => set
/// - sections: omitted => keep, array => replace the whole tree
///
/// Slug is immutable and MUST NOT be patchable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCvInput {
    #[serde(default)]
    pub title: PatchField<String>,

    #[serde(default)]
    pub language: PatchField<String>,

    #[serde(default, rename = "templateId")]
    pub template_id: PatchField<String>,

    #[serde(default, rename = "themeId")]
    pub theme_id: PatchField<String>,

    #[serde(default, rename = "isPublic")]
    pub is_public: PatchField<bool>,

    #[serde(default)]
    pub sections: Option<Vec<NewSectionInput>>,
}

//
// ──────────────────────────────────────────────────────────
// Outcome
// ──────────────────────────────────────────────────────────
//

/// Same best-effort child policy as create: replaced sections/items that
/// fail to insert are skipped and reported, never aborting the action.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateCvOutcome {
    #[serde(flatten)]
    pub document: CvDocument,

    #[serde(rename = "skippedSections", skip_serializing_if = "Vec::is_empty")]
    pub skipped_sections: Vec<SkippedSection>,

    #[serde(rename = "skippedItems", skip_serializing_if = "Vec::is_empty")]
    pub skipped_items: Vec<SkippedItem>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateCvError {
    /// Missing and foreign documents deny identically.
    #[error("CV not found")]
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
pub trait UpdateCvUseCase: Send + Sync {
    async fn execute(
        &self,
        principal: Principal,
        cv_id: Uuid,
        input: UpdateCvInput,
    ) -> Result<UpdateCvOutcome, UpdateCvError>;
}
