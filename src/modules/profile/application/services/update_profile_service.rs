use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::profile::application::ports::incoming::use_cases::{
    UpdateProfileError, UpdateProfileUseCase,
};
use crate::modules::profile::application::ports::outgoing::{
    ProfileRepository, ProfileRepositoryError, UpsertProfileData,
};
use crate::modules::profile::domain::entities::Profile;

pub struct UpdateProfileService<R>
where
    R: ProfileRepository,
{
    profile_repository: R,
}

impl<R> UpdateProfileService<R>
where
    R: ProfileRepository,
{
    pub fn new(profile_repository: R) -> Self {
        Self { profile_repository }
    }
}

#[async_trait]
impl<R> UpdateProfileUseCase for UpdateProfileService<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: Uuid,
        data: UpsertProfileData,
    ) -> Result<Profile, UpdateProfileError> {
        self.profile_repository
            .upsert(user_id, data)
            .await
            .map_err(|ProfileRepositoryError::DatabaseError(msg)| {
                UpdateProfileError::RepositoryError(msg)
            })
    }
}
