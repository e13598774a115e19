use async_trait::async_trait;
use tracing::warn;
use uuid::Uuid;

use crate::modules::identity::application::policy::{
    authorize, AccessDecision, DocumentAction, Principal,
};
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    GetPortfolioError, GetPortfolioUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::portfolio_repository::PortfolioRepository;
use crate::modules::portfolio::domain::assemble::assemble_portfolio;
use crate::modules::portfolio::domain::entities::PortfolioDocument;
use crate::modules::profile::application::ports::outgoing::profile_query::ProfileQuery;

pub struct GetPortfolioService<R, P>
where
    R: PortfolioRepository,
    P: ProfileQuery,
{
    portfolio_repository: R,
    profile_query: P,
}

impl<R, P> GetPortfolioService<R, P>
where
    R: PortfolioRepository,
    P: ProfileQuery,
{
    pub fn new(portfolio_repository: R, profile_query: P) -> Self {
        Self {
            portfolio_repository,
            profile_query,
        }
    }
}

#[async_trait]
impl<R, P> GetPortfolioUseCase for GetPortfolioService<R, P>
where
    R: PortfolioRepository + Send + Sync,
    P: ProfileQuery + Send + Sync,
{
    async fn execute(
        &self,
        principal: Principal,
        portfolio_id: Uuid,
    ) -> Result<PortfolioDocument, GetPortfolioError> {
        let rows = self
            .portfolio_repository
            .fetch_aggregate(portfolio_id)
            .await
            .map_err(|e| GetPortfolioError::RepositoryError(e.to_string()))?;

        let Some(rows) = rows else {
            return Err(GetPortfolioError::Unauthorized);
        };

        let decision = authorize(
            &principal,
            DocumentAction::ReadOwned {
                owner_id: Some(rows.portfolio.owner_id),
            },
        );
        if decision != AccessDecision::Allowed {
            return Err(GetPortfolioError::Unauthorized);
        }

        let personal_info = match self
            .profile_query
            .personal_info(rows.portfolio.owner_id)
            .await
        {
            Ok(info) => info,
            Err(e) => {
                warn!(user_id = %rows.portfolio.owner_id, error = %e, "personal info lookup failed, using defaults");
                Default::default()
            }
        };

        Ok(assemble_portfolio(
            rows.portfolio,
            rows.projects,
            rows.blocks,
            personal_info,
        ))
    }
}
