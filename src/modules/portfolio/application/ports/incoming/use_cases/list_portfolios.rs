use async_trait::async_trait;

use crate::modules::identity::application::policy::Principal;
use crate::modules::portfolio::domain::entities::PortfolioSummary;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListPortfoliosError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Lists the principal's own portfolios, newest first.
#[async_trait]
pub trait ListPortfoliosUseCase: Send + Sync {
    async fn execute(
        &self,
        principal: Principal,
    ) -> Result<Vec<PortfolioSummary>, ListPortfoliosError>;
}
