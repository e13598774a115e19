use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::modules::profile::domain::entities::PersonalInfo;

//
// ──────────────────────────────────────────────────────────
// Closed enums
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutKind {
    HeroTimeline,
    ProjectGrid,
    Minimal,
    Creative,
    Developer,
}

impl LayoutKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutKind::HeroTimeline => "hero_timeline",
            LayoutKind::ProjectGrid => "project_grid",
            LayoutKind::Minimal => "minimal",
            LayoutKind::Creative => "creative",
            LayoutKind::Developer => "developer",
        }
    }

    /// Stored values outside the closed set read back as the plainest
    /// layout rather than failing the whole aggregate.
    pub fn parse(s: &str) -> LayoutKind {
        match s {
            "hero_timeline" => LayoutKind::HeroTimeline,
            "project_grid" => LayoutKind::ProjectGrid,
            "creative" => LayoutKind::Creative,
            "developer" => LayoutKind::Developer,
            _ => LayoutKind::Minimal,
        }
    }
}

impl Default for LayoutKind {
    fn default() -> Self {
        LayoutKind::Minimal
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Hero,
    About,
    Projects,
    Experience,
    Skills,
    Contact,
    /// Catch-all for kinds outside the closed set.
    #[serde(other)]
    Custom,
}

impl BlockKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::Hero => "hero",
            BlockKind::About => "about",
            BlockKind::Projects => "projects",
            BlockKind::Experience => "experience",
            BlockKind::Skills => "skills",
            BlockKind::Contact => "contact",
            BlockKind::Custom => "custom",
        }
    }

    pub fn parse(s: &str) -> BlockKind {
        match s {
            "hero" => BlockKind::Hero,
            "about" => BlockKind::About,
            "projects" => BlockKind::Projects,
            "experience" => BlockKind::Experience,
            "skills" => BlockKind::Skills,
            "contact" => BlockKind::Contact,
            _ => BlockKind::Custom,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Aggregate
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize)]
pub struct FeaturedProject {
    pub id: Uuid,
    pub sort_order: i32,
    pub title: String,
    pub description: String,
    pub media_url: Option<String>,
    pub repo_url: Option<String>,
    pub live_url: Option<String>,
    pub tech_stack: Vec<String>,
    pub is_featured: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct PortfolioBlock {
    pub id: Uuid,
    pub kind: BlockKind,
    /// Opaque payload; shape is the presentation layer's contract.
    pub content: Map<String, Value>,
    pub sort_order: i32,
    pub is_visible: bool,
}

/// The editable portfolio aggregate with the read-only personal-info
/// projection from the owner's profile.
#[derive(Debug, Clone, Serialize)]
pub struct PortfolioDocument {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub slug: String,
    pub layout: LayoutKind,
    pub is_published: bool,
    pub cv_id: Option<Uuid>,
    pub theme_id: Option<String>,
    pub custom_domain: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_edited_at: DateTime<Utc>,
    pub personal_info: PersonalInfo,
    pub projects: Vec<FeaturedProject>,
    pub blocks: Vec<PortfolioBlock>,
}

/// Listing projection: metadata only, no children.
#[derive(Debug, Clone, Serialize)]
pub struct PortfolioSummary {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub layout: LayoutKind,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub last_edited_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_round_trips_through_storage_form() {
        for layout in [
            LayoutKind::HeroTimeline,
            LayoutKind::ProjectGrid,
            LayoutKind::Minimal,
            LayoutKind::Creative,
            LayoutKind::Developer,
        ] {
            assert_eq!(LayoutKind::parse(layout.as_str()), layout);
        }
    }

    #[test]
    fn unknown_stored_layout_reads_as_minimal() {
        assert_eq!(LayoutKind::parse("brutalist"), LayoutKind::Minimal);
    }

    #[test]
    fn unknown_stored_block_kind_reads_as_custom() {
        assert_eq!(BlockKind::parse("testimonials"), BlockKind::Custom);
    }

    #[test]
    fn layout_serializes_snake_case() {
        assert_eq!(
            serde_json::to_value(LayoutKind::HeroTimeline).unwrap(),
            serde_json::json!("hero_timeline")
        );
    }
}
