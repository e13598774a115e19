pub mod profiles {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "profiles")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
        pub user_id: Uuid,

        #[sea_orm(column_type = "Text", nullable)]
        pub full_name: Option<String>,

        #[sea_orm(column_type = "Text", nullable)]
        pub headline: Option<String>,

        #[sea_orm(column_type = "Text", nullable)]
        pub email: Option<String>,

        #[sea_orm(column_type = "Text", nullable)]
        pub phone: Option<String>,

        #[sea_orm(column_type = "Text", nullable)]
        pub location: Option<String>,

        #[sea_orm(column_type = "Text", nullable)]
        pub website: Option<String>,

        #[sea_orm(column_type = "Text", nullable)]
        pub bio: Option<String>,

        #[sea_orm(column_type = "Text", nullable)]
        pub avatar_url: Option<String>,

        pub is_admin: bool,

        #[sea_orm(column_type = "TimestampWithTimeZone")]
        pub created_at: DateTimeWithTimeZone,

        #[sea_orm(column_type = "TimestampWithTimeZone")]
        pub updated_at: DateTimeWithTimeZone,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}
