use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::identity::application::policy::Principal;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeletePortfolioError {
    /// Missing and foreign portfolios deny identically.
    #[error("Portfolio not found")]
    Unauthorized,

    #[error("Deletion failed: {0}")]
    DeletionFailed(String),
}

#[async_trait]
pub trait DeletePortfolioUseCase: Send + Sync {
    async fn execute(
        &self,
        principal: Principal,
        portfolio_id: Uuid,
    ) -> Result<(), DeletePortfolioError>;
}
