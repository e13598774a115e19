use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::profile::application::ports::outgoing::UpsertProfileData;
use crate::modules::profile::domain::entities::Profile;

#[derive(Debug, Clone)]
pub enum UpdateProfileError {
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateProfileUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        data: UpsertProfileData,
    ) -> Result<Profile, UpdateProfileError>;
}
