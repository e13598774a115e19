use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::modules::cv::domain::entities::{CvDocument, SectionKind};
use crate::modules::identity::application::policy::Principal;

//
// ──────────────────────────────────────────────────────────
// Input
// ──────────────────────────────────────────────────────────
//

/// Section as submitted by the editing client. Stored order is the
/// array index of the section/item in the request, never a
/// client-supplied field.
#[derive(Debug, Clone, Deserialize)]
pub struct NewSectionInput {
    #[serde(rename = "type")]
    pub kind: SectionKind,

    pub title: String,

    #[serde(default = "default_visible", rename = "isVisible")]
    pub is_visible: bool,

    #[serde(default)]
    pub items: Vec<Map<String, Value>>,
}

fn default_visible() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCvInput {
    pub title: String,

    #[serde(default)]
    pub language: Option<String>,

    #[serde(default, rename = "templateId")]
    pub template_id: Option<String>,

    #[serde(default, rename = "themeId")]
    pub theme_id: Option<String>,

    #[serde(default, rename = "isPublic")]
    pub is_public: bool,

    #[serde(default)]
    pub sections: Vec<NewSectionInput>,
}

//
// ──────────────────────────────────────────────────────────
// Outcome
// ──────────────────────────────────────────────────────────
//

/// Child rows are best-effort: a failed section or item is skipped and
/// reported here instead of aborting the create. The parent row is
/// strict — its failure aborts the whole action.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedSection {
    /// Index of the section in the request payload.
    pub index: usize,
    pub title: String,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkippedItem {
    /// Index of the owning section in the request payload.
    #[serde(rename = "sectionIndex")]
    pub section_index: usize,

    /// Index of the item within that section's items array.
    #[serde(rename = "itemIndex")]
    pub item_index: usize,

    pub reason: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateCvOutcome {
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
pub enum CreateCvError {
    /// Storage failed on the parent CV row.
    #[error("Creation failed: {0}")]
    CreationFailed(String),
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateCvUseCase: Send + Sync {
    async fn execute(
        &self,
        principal: Principal,
        input: CreateCvInput,
    ) -> Result<CreateCvOutcome, CreateCvError>;
}
