use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cv_items")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_name = "section_id", column_type = "Uuid")]
    pub section_id: Uuid,

    pub sort_order: i32,

    /// Opaque payload; shape depends on the parent section's kind.
    #[sea_orm(column_type = "JsonBinary")]
    pub data: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::cv_sections::Entity",
        from = "Column::SectionId",
        to = "super::cv_sections::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    CvSections,
}

impl Related<super::cv_sections::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CvSections.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
