use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "portfolio_views")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_name = "portfolio_id", column_type = "Uuid")]
    pub portfolio_id: Uuid,

    /// FNV-1a hex of the client network address; empty when unknown.
    #[sea_orm(column_type = "Text")]
    pub visitor_hash: String,

    #[sea_orm(column_type = "Text")]
    pub user_agent: String,

    #[sea_orm(column_type = "Text")]
    pub referrer: String,

    #[sea_orm(column_type = "Text")]
    pub device_type: String,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub viewed_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
