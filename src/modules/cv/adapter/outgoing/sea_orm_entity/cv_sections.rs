use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cv_sections")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_name = "cv_id", column_type = "Uuid")]
    pub cv_id: Uuid,

    /// Stored as plain text so kinds outside the closed set survive.
    #[sea_orm(column_type = "Text", string_len = 50)]
    pub kind: String,

    #[sea_orm(column_type = "Text", string_len = 150)]
    pub title: String,

    pub sort_order: i32,

    pub is_visible: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::cvs::Entity",
        from = "Column::CvId",
        to = "super::cvs::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Cvs,

    #[sea_orm(has_many = "super::cv_items::Entity")]
    CvItems,
}

impl Related<super::cvs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cvs.def()
    }
}

impl Related<super::cv_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CvItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
