use async_trait::async_trait;
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::modules::cv::domain::assemble::{CvRow, ItemRow, SectionRow};
use crate::shared::patch::PatchField;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct NewCvRow {
    pub owner_id: Uuid,
    pub title: String,

    /// Resolved by the create flow; immutable after insert.
    pub slug: String,

    pub language: String,
    pub template_id: Option<String>,
    pub theme_id: Option<String>,
    pub is_public: bool,
}

#[derive(Debug, Clone)]
pub struct NewSectionRow {
    pub cv_id: Uuid,
    pub kind: String,
    pub title: String,
    pub sort_order: i32,
    pub is_visible: bool,
}

#[derive(Debug, Clone)]
pub struct NewItemRow {
    pub section_id: Uuid,
    pub sort_order: i32,
    pub data: Map<String, Value>,
}

/// Patch semantics:
/// - title/language/template_id/is_public: Unset => keep, Value => replace
/// - theme_id: Unset => keep, Null => clear, Value => set
///
/// Every successful patch bumps `last_edited_at`.
#[derive(Debug, Clone, Default)]
pub struct UpdateCvData {
    pub title: PatchField<String>,
    pub language: PatchField<String>,
    pub template_id: PatchField<String>,
    pub theme_id: PatchField<String>,
    pub is_public: PatchField<bool>,
}

#[derive(Debug, Clone)]
pub struct CvAggregateRows {
    pub cv: CvRow,
    pub sections: Vec<SectionRow>,
    pub items: Vec<ItemRow>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CvRepositoryError {
    #[error("CV not found")]
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
pub trait CvRepository: Send + Sync {
    async fn insert_cv(&self, data: NewCvRow) -> Result<CvRow, CvRepositoryError>;

    /// Sections and items insert one row at a time so a failed child
    /// never aborts its siblings.
    async fn insert_section(&self, data: NewSectionRow) -> Result<SectionRow, CvRepositoryError>;

    async fn insert_item(&self, data: NewItemRow) -> Result<ItemRow, CvRepositoryError>;

    /// Point lookup backing the slug uniqueness probe.
    async fn slug_exists(&self, owner_id: Uuid, slug: &str) -> Result<bool, CvRepositoryError>;

    /// Newest-first by creation time.
    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<CvRow>, CvRepositoryError>;

    async fn find_cv(&self, cv_id: Uuid) -> Result<Option<CvRow>, CvRepositoryError>;

    async fn fetch_aggregate(
        &self,
        cv_id: Uuid,
    ) -> Result<Option<CvAggregateRows>, CvRepositoryError>;

    async fn update_cv(&self, cv_id: Uuid, data: UpdateCvData)
        -> Result<CvRow, CvRepositoryError>;

    /// Cascade clears the items of every removed section.
    async fn delete_sections(&self, cv_id: Uuid) -> Result<(), CvRepositoryError>;

    /// Cascade clears sections and items.
    async fn delete_cv(&self, cv_id: Uuid) -> Result<(), CvRepositoryError>;
}
