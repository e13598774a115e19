use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::profile::domain::entities::Profile;

#[derive(Debug, Clone)]
pub enum FetchProfileError {
    NotFound,
    RepositoryError(String),
}

#[async_trait]
pub trait FetchProfileUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<Profile, FetchProfileError>;
}
