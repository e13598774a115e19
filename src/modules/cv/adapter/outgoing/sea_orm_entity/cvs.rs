use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cvs")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_name = "user_id", column_type = "Uuid")]
    pub user_id: Uuid,

    #[sea_orm(column_type = "Text", string_len = 150)]
    pub title: String,

    /// Unique per owner, not globally (uq_cvs_user_id_slug).
    #[sea_orm(column_type = "Text", string_len = 150)]
    pub slug: String,

    #[sea_orm(column_type = "Text", string_len = 10)]
    pub language: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub template_id: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub theme_id: Option<String>,

    pub is_public: bool,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub last_edited_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::cv_sections::Entity")]
    CvSections,
}

impl Related<super::cv_sections::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CvSections.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
