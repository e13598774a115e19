use async_trait::async_trait;

use crate::modules::identity::application::policy::Principal;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    ListPortfoliosError, ListPortfoliosUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::portfolio_repository::PortfolioRepository;
use crate::modules::portfolio::domain::entities::{LayoutKind, PortfolioSummary};

pub struct ListPortfoliosService<R>
where
    R: PortfolioRepository,
{
    portfolio_repository: R,
}

impl<R> ListPortfoliosService<R>
where
    R: PortfolioRepository,
{
    pub fn new(portfolio_repository: R) -> Self {
        Self {
            portfolio_repository,
        }
    }
}

#[async_trait]
impl<R> ListPortfoliosUseCase for ListPortfoliosService<R>
where
    R: PortfolioRepository + Send + Sync,
{
    async fn execute(
        &self,
        principal: Principal,
    ) -> Result<Vec<PortfolioSummary>, ListPortfoliosError> {
        let rows = self
            .portfolio_repository
            .list_by_owner(principal.user_id)
            .await
            .map_err(|e| ListPortfoliosError::RepositoryError(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|p| PortfolioSummary {
                id: p.id,
                title: p.title,
                slug: p.slug,
                layout: LayoutKind::parse(&p.layout),
                is_published: p.is_published,
                created_at: p.created_at,
                last_edited_at: p.last_edited_at,
            })
            .collect())
    }
}
