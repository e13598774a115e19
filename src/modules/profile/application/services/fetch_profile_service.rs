use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::profile::application::ports::incoming::use_cases::{
    FetchProfileError, FetchProfileUseCase,
};
use crate::modules::profile::application::ports::outgoing::{ProfileQuery, ProfileQueryError};
use crate::modules::profile::domain::entities::Profile;

pub struct FetchProfileService<Q>
where
    Q: ProfileQuery,
{
    profile_query: Q,
}

impl<Q> FetchProfileService<Q>
where
    Q: ProfileQuery,
{
    pub fn new(profile_query: Q) -> Self {
        Self { profile_query }
    }
}

#[async_trait]
impl<Q> FetchProfileUseCase for FetchProfileService<Q>
where
    Q: ProfileQuery + Send + Sync,
{
    async fn execute(&self, user_id: Uuid) -> Result<Profile, FetchProfileError> {
        self.profile_query
            .fetch(user_id)
            .await
            .map_err(|ProfileQueryError::DatabaseError(msg)| {
                FetchProfileError::RepositoryError(msg)
            })?
            .ok_or(FetchProfileError::NotFound)
    }
}
