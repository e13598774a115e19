use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::profile::adapter::outgoing::profile_query_postgres::model_to_profile;
use crate::modules::profile::adapter::outgoing::sea_orm_entity::profiles::{
    ActiveModel, Entity, Model,
};
use crate::modules::profile::application::ports::outgoing::{
    ProfileRepository, ProfileRepositoryError, UpsertProfileData,
};
use crate::modules::profile::domain::entities::Profile;

#[derive(Clone)]
pub struct ProfileRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryPostgres {
    async fn upsert(
        &self,
        user_id: Uuid,
        data: UpsertProfileData,
    ) -> Result<Profile, ProfileRepositoryError> {
        let existing: Option<Model> = Entity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| ProfileRepositoryError::DatabaseError(e.to_string()))?;

        let now = Utc::now().fixed_offset();

        let saved = match existing {
            Some(row) => {
                let mut model: ActiveModel = row.into();
                apply(&mut model, data);
                model.updated_at = Set(now);
                model
                    .update(&*self.db)
                    .await
                    .map_err(|e| ProfileRepositoryError::DatabaseError(e.to_string()))?
            }
            None => {
                let mut model = ActiveModel {
                    user_id: Set(user_id),
                    is_admin: Set(false),
                    created_at: Set(now),
                    updated_at: Set(now),
                    ..Default::default()
                };
                apply(&mut model, data);
                model
                    .insert(&*self.db)
                    .await
                    .map_err(|e| ProfileRepositoryError::DatabaseError(e.to_string()))?
            }
        };

        Ok(model_to_profile(saved))
    }
}

// None means "leave as stored"; empty string clears a field explicitly.
fn apply(model: &mut ActiveModel, data: UpsertProfileData) {
    if let Some(v) = data.full_name {
        model.full_name = Set(Some(v));
    }
    if let Some(v) = data.headline {
        model.headline = Set(Some(v));
    }
    if let Some(v) = data.email {
        model.email = Set(Some(v));
    }
    if let Some(v) = data.phone {
        model.phone = Set(Some(v));
    }
    if let Some(v) = data.location {
        model.location = Set(Some(v));
    }
    if let Some(v) = data.website {
        model.website = Set(Some(v));
    }
    if let Some(v) = data.bio {
        model.bio = Set(Some(v));
    }
    if let Some(v) = data.avatar_url {
        model.avatar_url = Set(Some(v));
    }
}
