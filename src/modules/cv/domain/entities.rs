use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::modules::profile::domain::entities::PersonalInfo;

/// Baseline template applied when a CV has no explicit template.
pub const DEFAULT_TEMPLATE_ID: &str = "classic";

//
// ──────────────────────────────────────────────────────────
// Section kinds
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Experience,
    Education,
    Skills,
    Projects,
    Certifications,
    Languages,
    Awards,
    About,
    /// Catch-all for kinds outside the closed set.
    #[serde(other)]
    Custom,
}

impl SectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Experience => "experience",
            SectionKind::Education => "education",
            SectionKind::Skills => "skills",
            SectionKind::Projects => "projects",
            SectionKind::Certifications => "certifications",
            SectionKind::Languages => "languages",
            SectionKind::Awards => "awards",
            SectionKind::About => "about",
            SectionKind::Custom => "custom",
        }
    }

    /// Stored kinds outside the closed set read back as Custom rather
    /// than failing the whole aggregate.
    pub fn parse(s: &str) -> SectionKind {
        match s {
            "experience" => SectionKind::Experience,
            "education" => SectionKind::Education,
            "skills" => SectionKind::Skills,
            "projects" => SectionKind::Projects,
            "certifications" => SectionKind::Certifications,
            "languages" => SectionKind::Languages,
            "awards" => SectionKind::Awards,
            "about" => SectionKind::About,
            _ => SectionKind::Custom,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Item payloads (one typed variant per section kind)
// ──────────────────────────────────────────────────────────
// The variant is chosen from the parent section's kind, never guessed
// from the payload itself. Unknown keys land in the flattened `extra`
// map and round-trip unchanged. A payload whose known fields carry the
// wrong JSON type degrades to Opaque instead of being rejected:
// payload shape is the presentation layer's contract, not ours.
//

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub degree: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proficiency: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CertificationItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issued_date: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LanguageItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AwardItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AboutItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ItemPayload {
    Experience(ExperienceItem),
    Education(EducationItem),
    Skill(SkillItem),
    Project(ProjectItem),
    Certification(CertificationItem),
    Language(LanguageItem),
    Award(AwardItem),
    About(AboutItem),
    Opaque(Map<String, Value>),
}

impl ItemPayload {
    /// Decode a payload map under the parent section's kind.
    pub fn from_map(kind: SectionKind, map: Map<String, Value>) -> ItemPayload {
        fn decode<T: serde::de::DeserializeOwned>(
            map: Map<String, Value>,
        ) -> Result<T, Map<String, Value>> {
            match serde_json::from_value(Value::Object(map.clone())) {
                Ok(typed) => Ok(typed),
                Err(_) => Err(map),
            }
        }

        match kind {
            SectionKind::Experience => match decode(map) {
                Ok(item) => ItemPayload::Experience(item),
                Err(map) => ItemPayload::Opaque(map),
            },
            SectionKind::Education => match decode(map) {
                Ok(item) => ItemPayload::Education(item),
                Err(map) => ItemPayload::Opaque(map),
            },
            SectionKind::Skills => match decode(map) {
                Ok(item) => ItemPayload::Skill(item),
                Err(map) => ItemPayload::Opaque(map),
            },
            SectionKind::Projects => match decode(map) {
                Ok(item) => ItemPayload::Project(item),
                Err(map) => ItemPayload::Opaque(map),
            },
            SectionKind::Certifications => match decode(map) {
                Ok(item) => ItemPayload::Certification(item),
                Err(map) => ItemPayload::Opaque(map),
            },
            SectionKind::Languages => match decode(map) {
                Ok(item) => ItemPayload::Language(item),
                Err(map) => ItemPayload::Opaque(map),
            },
            SectionKind::Awards => match decode(map) {
                Ok(item) => ItemPayload::Award(item),
                Err(map) => ItemPayload::Opaque(map),
            },
            SectionKind::About => match decode(map) {
                Ok(item) => ItemPayload::About(item),
                Err(map) => ItemPayload::Opaque(map),
            },
            SectionKind::Custom => ItemPayload::Opaque(map),
        }
    }

    /// Project the payload back to its stored JSON object form.
    pub fn to_map(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Aggregate
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize)]
pub struct SectionItem {
    pub id: Uuid,
    pub sort_order: i32,
    #[serde(rename = "data")]
    pub payload: ItemPayload,
}

#[derive(Debug, Clone, Serialize)]
pub struct Section {
    pub id: Uuid,
    pub kind: SectionKind,
    pub title: String,
    pub sort_order: i32,
    pub is_visible: bool,
    pub items: Vec<SectionItem>,
}

/// The editable CV aggregate: metadata, ordered sections with ordered
/// items, and the read-only personal-info projection from the owner's
/// profile.
#[derive(Debug, Clone, Serialize)]
pub struct CvDocument {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub slug: String,
    pub language: String,
    pub template_id: String,
    pub theme_id: Option<String>,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub last_edited_at: DateTime<Utc>,
    pub personal_info: PersonalInfo,
    pub sections: Vec<Section>,
}

/// Listing projection: metadata only, no children.
#[derive(Debug, Clone, Serialize)]
pub struct CvSummary {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub language: String,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub last_edited_at: DateTime<Utc>,
}
