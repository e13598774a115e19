use async_trait::async_trait;
use tracing::warn;
use uuid::Uuid;

use crate::modules::identity::application::policy::Principal;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    CreatePortfolioError, CreatePortfolioInput, CreatePortfolioOutcome, CreatePortfolioUseCase,
    SkippedChild,
};
use crate::modules::portfolio::application::ports::outgoing::portfolio_repository::{
    NewBlockRow, NewPortfolioRow, NewProjectRow, PortfolioRepository,
};
use crate::modules::portfolio::domain::assemble::assemble_portfolio;
use crate::modules::cv::domain::slug::{derive_slug, fallback_slug, probe_candidate};
use crate::modules::profile::application::ports::outgoing::profile_query::ProfileQuery;
use crate::shared::revalidate::RevalidationHook;

/// Bounded slug probe before giving up on title-derived candidates.
const SLUG_PROBE_ATTEMPTS: u32 = 100;

const SLUG_FALLBACK_PREFIX: &str = "portfolio";

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct CreatePortfolioService<R, P, H>
where
    R: PortfolioRepository,
    P: ProfileQuery,
    H: RevalidationHook,
{
    portfolio_repository: R,
    profile_query: P,
    revalidator: H,
}

impl<R, P, H> CreatePortfolioService<R, P, H>
where
    R: PortfolioRepository,
    P: ProfileQuery,
    H: RevalidationHook,
{
    pub fn new(portfolio_repository: R, profile_query: P, revalidator: H) -> Self {
        Self {
            portfolio_repository,
            profile_query,
            revalidator,
        }
    }

    async fn resolve_slug(&self, owner_id: Uuid, title: &str) -> String {
        let mut base = derive_slug(title);
        if base.is_empty() {
            base = fallback_slug(SLUG_FALLBACK_PREFIX);
        }

        for attempt in 1..=SLUG_PROBE_ATTEMPTS {
            let candidate = probe_candidate(&base, attempt);
            match self
                .portfolio_repository
                .slug_exists(owner_id, &candidate)
                .await
            {
                Ok(false) => return candidate,
                Ok(true) => continue,
                Err(e) => {
                    warn!(slug = %candidate, error = %e, "slug probe failed, falling back");
                    return fallback_slug(SLUG_FALLBACK_PREFIX);
                }
            }
        }

        fallback_slug(SLUG_FALLBACK_PREFIX)
    }
}

#[async_trait]
impl<R, P, H> CreatePortfolioUseCase for CreatePortfolioService<R, P, H>
where
    R: PortfolioRepository + Send + Sync,
    P: ProfileQuery + Send + Sync,
    H: RevalidationHook + Send + Sync,
{
    async fn execute(
        &self,
        principal: Principal,
        input: CreatePortfolioInput,
    ) -> Result<CreatePortfolioOutcome, CreatePortfolioError> {
        // No quota here: the 3-document cap is a CV rule.
        let slug = self.resolve_slug(principal.user_id, &input.title).await;

        let portfolio = self
            .portfolio_repository
            .insert_portfolio(NewPortfolioRow {
                owner_id: principal.user_id,
                title: input.title,
                slug,
                layout: input.layout.as_str().to_string(),
                is_published: input.is_published,
                cv_id: input.cv_id,
                theme_id: input.theme_id,
                custom_domain: input.custom_domain,
            })
            .await
            .map_err(|e| CreatePortfolioError::CreationFailed(e.to_string()))?;

        let mut projects = Vec::new();
        let mut blocks = Vec::new();
        let mut skipped_projects = Vec::new();
        let mut skipped_blocks = Vec::new();

        for (index, project) in input.projects.into_iter().enumerate() {
            match self
                .portfolio_repository
                .insert_project(NewProjectRow {
                    portfolio_id: portfolio.id,
                    title: project.title,
                    description: project.description,
                    media_url: project.media_url,
                    repo_url: project.repo_url,
                    live_url: project.live_url,
                    tech_stack: project.tech_stack,
                    is_featured: project.is_featured,
                    sort_order: index as i32,
                })
                .await
            {
                Ok(row) => projects.push(row),
                Err(e) => {
                    warn!(portfolio_id = %portfolio.id, index, error = %e, "project insert failed, skipping");
                    skipped_projects.push(SkippedChild {
                        index,
                        reason: e.to_string(),
                    });
                }
            }
        }

        for (index, block) in input.blocks.into_iter().enumerate() {
            match self
                .portfolio_repository
                .insert_block(NewBlockRow {
                    portfolio_id: portfolio.id,
                    kind: block.kind.as_str().to_string(),
                    content: block.content,
                    sort_order: index as i32,
                    is_visible: block.is_visible,
                })
                .await
            {
                Ok(row) => blocks.push(row),
                Err(e) => {
                    warn!(portfolio_id = %portfolio.id, index, error = %e, "block insert failed, skipping");
                    skipped_blocks.push(SkippedChild {
                        index,
                        reason: e.to_string(),
                    });
                }
            }
        }

        let personal_info = match self.profile_query.personal_info(portfolio.owner_id).await {
            Ok(info) => info,
            Err(e) => {
                warn!(user_id = %portfolio.owner_id, error = %e, "personal info lookup failed, using defaults");
                Default::default()
            }
        };

        self.revalidator.mark_stale("/portfolios").await;

        Ok(CreatePortfolioOutcome {
            document: assemble_portfolio(portfolio, projects, blocks, personal_info),
            skipped_projects,
            skipped_blocks,
        })
    }
}
