use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "portfolios")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_name = "user_id", column_type = "Uuid")]
    pub user_id: Uuid,

    #[sea_orm(column_type = "Text", string_len = 150)]
    pub title: String,

    /// Unique per owner, not globally (uq_portfolios_user_id_slug).
    #[sea_orm(column_type = "Text", string_len = 150)]
    pub slug: String,

    /// Stored as the wire form of the layout enum.
    #[sea_orm(column_type = "Text")]
    pub layout: String,

    pub is_published: bool,

    #[sea_orm(column_type = "Uuid", nullable)]
    pub cv_id: Option<Uuid>,

    #[sea_orm(column_type = "Text", nullable)]
    pub theme_id: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub custom_domain: Option<String>,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub last_edited_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::featured_projects::Entity")]
    FeaturedProjects,

    #[sea_orm(has_many = "super::portfolio_blocks::Entity")]
    PortfolioBlocks,
}

impl Related<super::featured_projects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FeaturedProjects.def()
    }
}

impl Related<super::portfolio_blocks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PortfolioBlocks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
