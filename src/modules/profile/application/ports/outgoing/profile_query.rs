use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::profile::domain::entities::{PersonalInfo, Profile};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProfileQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Read side of the `profiles` table. `personal_info` and `is_admin`
/// tolerate a missing row: a user who never filled their profile still
/// gets empty-string defaults and no privileges.
#[async_trait]
pub trait ProfileQuery: Send + Sync {
    async fn fetch(&self, user_id: Uuid) -> Result<Option<Profile>, ProfileQueryError>;

    async fn personal_info(&self, user_id: Uuid) -> Result<PersonalInfo, ProfileQueryError>;

    async fn is_admin(&self, user_id: Uuid) -> Result<bool, ProfileQueryError>;
}
