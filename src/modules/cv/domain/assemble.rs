use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::modules::profile::domain::entities::PersonalInfo;

use super::entities::{
    CvDocument, ItemPayload, Section, SectionItem, SectionKind, DEFAULT_TEMPLATE_ID,
};

//
// ──────────────────────────────────────────────────────────
// Raw storage projections
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CvRow {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub slug: String,
    pub language: String,
    pub template_id: Option<String>,
    pub theme_id: Option<String>,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub last_edited_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct SectionRow {
    pub id: Uuid,
    pub cv_id: Uuid,
    pub kind: String,
    pub title: String,
    pub sort_order: i32,
    pub is_visible: bool,
}

#[derive(Debug, Clone)]
pub struct ItemRow {
    pub id: Uuid,
    pub section_id: Uuid,
    pub sort_order: i32,
    pub data: Map<String, Value>,
}

//
// ──────────────────────────────────────────────────────────
// Assembly (rows + profile projection -> editable aggregate)
// ──────────────────────────────────────────────────────────
//

/// Assemble the three-level aggregate for editing/display.
///
/// Sections and items sort by `(sort_order, id)` — equal order values
/// are legal and the id breaks the tie deterministically. Absent
/// optionals become display-safe defaults; the template falls back to
/// the baseline.
pub fn assemble_document(
    cv: CvRow,
    mut sections: Vec<SectionRow>,
    mut items: Vec<ItemRow>,
    personal_info: PersonalInfo,
) -> CvDocument {
    sections.sort_by(|a, b| (a.sort_order, a.id).cmp(&(b.sort_order, b.id)));
    items.sort_by(|a, b| (a.sort_order, a.id).cmp(&(b.sort_order, b.id)));

    let assembled_sections = sections
        .into_iter()
        .map(|section| {
            let kind = SectionKind::parse(&section.kind);
            let section_items = items
                .iter()
                .filter(|item| item.section_id == section.id)
                .map(|item| SectionItem {
                    id: item.id,
                    sort_order: item.sort_order,
                    payload: ItemPayload::from_map(kind, item.data.clone()),
                })
                .collect();

            Section {
                id: section.id,
                kind,
                title: section.title,
                sort_order: section.sort_order,
                is_visible: section.is_visible,
                items: section_items,
            }
        })
        .collect();

    CvDocument {
        id: cv.id,
        owner_id: cv.owner_id,
        title: cv.title,
        slug: cv.slug,
        language: cv.language,
        template_id: cv
            .template_id
            .unwrap_or_else(|| DEFAULT_TEMPLATE_ID.to_string()),
        theme_id: cv.theme_id,
        is_public: cv.is_public,
        created_at: cv.created_at,
        last_edited_at: cv.last_edited_at,
        personal_info,
        sections: assembled_sections,
    }
}

/// Strip the client-assigned `id` from an item payload before storage.
/// Item identity is assigned by the store, never trusted from the
/// editing client on create.
pub fn sanitize_item_payload(mut data: Map<String, Value>) -> Map<String, Value> {
    data.remove("id");
    data
}
