use async_trait::async_trait;

use crate::modules::cv::domain::entities::CvSummary;
use crate::modules::identity::application::policy::Principal;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListCvsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Lists the principal's own CVs, newest first.
#[async_trait]
pub trait ListCvsUseCase: Send + Sync {
    async fn execute(&self, principal: Principal) -> Result<Vec<CvSummary>, ListCvsError>;
}
