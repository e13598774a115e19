use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::profile::adapter::outgoing::sea_orm_entity::profiles::{self, Entity};
use crate::modules::profile::application::ports::outgoing::{ProfileQuery, ProfileQueryError};
use crate::modules::profile::domain::entities::{PersonalInfo, Profile};

#[derive(Clone)]
pub struct ProfileQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileQuery for ProfileQueryPostgres {
    async fn fetch(&self, user_id: Uuid) -> Result<Option<Profile>, ProfileQueryError> {
        let row = Entity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(model_to_profile))
    }

    async fn personal_info(&self, user_id: Uuid) -> Result<PersonalInfo, ProfileQueryError> {
        let row = Entity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        // No profile row yet: project empty defaults, never an error
        Ok(row.map(model_to_personal_info).unwrap_or_default())
    }

    async fn is_admin(&self, user_id: Uuid) -> Result<bool, ProfileQueryError> {
        let row = Entity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(|m| m.is_admin).unwrap_or(false))
    }
}

pub(crate) fn model_to_personal_info(model: profiles::Model) -> PersonalInfo {
    PersonalInfo {
        full_name: model.full_name.unwrap_or_default(),
        headline: model.headline.unwrap_or_default(),
        email: model.email.unwrap_or_default(),
        phone: model.phone.unwrap_or_default(),
        location: model.location.unwrap_or_default(),
        website: model.website.unwrap_or_default(),
        bio: model.bio.unwrap_or_default(),
        avatar_url: model.avatar_url.unwrap_or_default(),
    }
}

pub(crate) fn model_to_profile(model: profiles::Model) -> Profile {
    let user_id = model.user_id;
    let is_admin = model.is_admin;
    let created_at = model.created_at.into();
    let updated_at = model.updated_at.into();

    Profile {
        user_id,
        is_admin,
        created_at,
        updated_at,
        personal: model_to_personal_info(model),
    }
}

fn map_db_err(e: DbErr) -> ProfileQueryError {
    ProfileQueryError::DatabaseError(e.to_string())
}
