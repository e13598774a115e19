use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::modules::identity::application::policy::{
    authorize, AccessDecision, DocumentAction, Principal,
};
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    DeletePortfolioError, DeletePortfolioUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::portfolio_repository::{
    PortfolioRepository, PortfolioRepositoryError,
};
use crate::shared::revalidate::RevalidationHook;

pub struct DeletePortfolioService<R, H>
where
    R: PortfolioRepository,
    H: RevalidationHook,
{
    portfolio_repository: R,
    revalidator: H,
}

impl<R, H> DeletePortfolioService<R, H>
where
    R: PortfolioRepository,
    H: RevalidationHook,
{
    pub fn new(portfolio_repository: R, revalidator: H) -> Self {
        Self {
            portfolio_repository,
            revalidator,
        }
    }
}

#[async_trait]
impl<R, H> DeletePortfolioUseCase for DeletePortfolioService<R, H>
where
    R: PortfolioRepository + Send + Sync,
    H: RevalidationHook + Send + Sync,
{
    async fn execute(
        &self,
        principal: Principal,
        portfolio_id: Uuid,
    ) -> Result<(), DeletePortfolioError> {
        // Ownership resolves before any privilege assumption.
        let owner_id = self
            .portfolio_repository
            .find_portfolio(portfolio_id)
            .await
            .map_err(|e| DeletePortfolioError::DeletionFailed(e.to_string()))?
            .map(|p| p.owner_id);

        match authorize(&principal, DocumentAction::Mutate { owner_id }) {
            AccessDecision::Allowed if owner_id.is_some() => {}
            _ => return Err(DeletePortfolioError::Unauthorized),
        }

        self.portfolio_repository
            .delete_portfolio(portfolio_id)
            .await
            .map_err(|e| match e {
                PortfolioRepositoryError::NotFound => DeletePortfolioError::Unauthorized,
                other => DeletePortfolioError::DeletionFailed(other.to_string()),
            })?;

        info!(%portfolio_id, "portfolio deleted");
        self.revalidator.mark_stale("/portfolios").await;
        Ok(())
    }
}
