use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::identity::application::policy::Principal;
use crate::modules::portfolio::domain::entities::PortfolioDocument;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetPortfolioError {
    /// Missing and foreign portfolios deny identically.
    #[error("Portfolio not found")]
    Unauthorized,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetPortfolioUseCase: Send + Sync {
    async fn execute(
        &self,
        principal: Principal,
        portfolio_id: Uuid,
    ) -> Result<PortfolioDocument, GetPortfolioError>;
}
