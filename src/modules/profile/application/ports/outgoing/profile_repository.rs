use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::profile::domain::entities::Profile;

#[derive(Debug, Clone, Default)]
pub struct UpsertProfileData {
    pub full_name: Option<String>,
    pub headline: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProfileRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Write side of the `profiles` table. Upsert creates the row on first
/// save; `is_admin` is never writable through this port.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn upsert(
        &self,
        user_id: Uuid,
        data: UpsertProfileData,
    ) -> Result<Profile, ProfileRepositoryError>;
}
