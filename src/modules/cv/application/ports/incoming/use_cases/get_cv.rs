use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::cv::domain::entities::CvDocument;
use crate::modules::identity::application::policy::Principal;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetCvError {
    /// Missing and foreign documents deny identically.
    #[error("CV not found")]
    Unauthorized,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetCvUseCase: Send + Sync {
    async fn execute(&self, principal: Principal, cv_id: Uuid)
        -> Result<CvDocument, GetCvError>;
}
