use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::identity::application::policy::Principal;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteCvError {
    /// Missing and foreign documents deny identically: a caller probing
    /// other users' ids learns nothing about what exists.
    #[error("CV not found")]
    Unauthorized,

    #[error("Deletion failed: {0}")]
    DeletionFailed(String),
}

#[async_trait]
pub trait DeleteCvUseCase: Send + Sync {
    async fn execute(&self, principal: Principal, cv_id: Uuid) -> Result<(), DeleteCvError>;
}
