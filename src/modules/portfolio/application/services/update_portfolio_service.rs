use async_trait::async_trait;
use tracing::warn;
use uuid::Uuid;

use crate::modules::identity::application::policy::{
    authorize, AccessDecision, DocumentAction, Principal,
};
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    NewBlockInput, NewProjectInput, SkippedChild, UpdatePortfolioError, UpdatePortfolioInput,
    UpdatePortfolioOutcome, UpdatePortfolioUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::portfolio_repository::{
    NewBlockRow, NewProjectRow, PortfolioRepository, UpdatePortfolioData,
};
use crate::modules::portfolio::domain::assemble::assemble_portfolio;
use crate::modules::profile::application::ports::outgoing::profile_query::ProfileQuery;
use crate::shared::patch::PatchField;
use crate::shared::revalidate::RevalidationHook;

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct UpdatePortfolioService<R, P, H>
where
    R: PortfolioRepository,
    P: ProfileQuery,
    H: RevalidationHook,
{
    portfolio_repository: R,
    profile_query: P,
    revalidator: H,
}

impl<R, P, H> UpdatePortfolioService<R, P, H>
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

    /// Same best-effort child policy as creation: failed rows are
    /// skipped and reported, never aborting the action.
    async fn replace_projects(
        &self,
        portfolio_id: Uuid,
        projects: Vec<NewProjectInput>,
        skipped: &mut Vec<SkippedChild>,
    ) -> Result<(), UpdatePortfolioError> {
        self.portfolio_repository
            .delete_projects(portfolio_id)
            .await
            .map_err(|e| UpdatePortfolioError::UpdateFailed(e.to_string()))?;

        for (index, project) in projects.into_iter().enumerate() {
            if let Err(e) = self
                .portfolio_repository
                .insert_project(NewProjectRow {
                    portfolio_id,
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
                warn!(%portfolio_id, index, error = %e, "project insert failed, skipping");
                skipped.push(SkippedChild {
                    index,
                    reason: e.to_string(),
                });
            }
        }

        Ok(())
    }

    async fn replace_blocks(
        &self,
        portfolio_id: Uuid,
        blocks: Vec<NewBlockInput>,
        skipped: &mut Vec<SkippedChild>,
    ) -> Result<(), UpdatePortfolioError> {
        self.portfolio_repository
            .delete_blocks(portfolio_id)
            .await
            .map_err(|e| UpdatePortfolioError::UpdateFailed(e.to_string()))?;

        for (index, block) in blocks.into_iter().enumerate() {
            if let Err(e) = self
                .portfolio_repository
                .insert_block(NewBlockRow {
                    portfolio_id,
                    kind: block.kind.as_str().to_string(),
                    content: block.content,
                    sort_order: index as i32,
                    is_visible: block.is_visible,
                })
                .await
            {
                warn!(%portfolio_id, index, error = %e, "block insert failed, skipping");
                skipped.push(SkippedChild {
                    index,
                    reason: e.to_string(),
                });
            }
        }

        Ok(())
    }
}

/// Explicit null is only meaningful for nullable columns.
fn reject_null<T>(field: &PatchField<T>, name: &str) -> Result<(), UpdatePortfolioError> {
    if field.is_null() {
        return Err(UpdatePortfolioError::Validation(format!(
            "{} cannot be null",
            name
        )));
    }
    Ok(())
}

#[async_trait]
impl<R, P, H> UpdatePortfolioUseCase for UpdatePortfolioService<R, P, H>
where
    R: PortfolioRepository + Send + Sync,
    P: ProfileQuery + Send + Sync,
    H: RevalidationHook + Send + Sync,
{
    async fn execute(
        &self,
        principal: Principal,
        portfolio_id: Uuid,
        input: UpdatePortfolioInput,
    ) -> Result<UpdatePortfolioOutcome, UpdatePortfolioError> {
        reject_null(&input.title, "title")?;
        reject_null(&input.layout, "layout")?;
        reject_null(&input.is_published, "isPublished")?;

        let owner_id = self
            .portfolio_repository
            .find_portfolio(portfolio_id)
            .await
            .map_err(|e| UpdatePortfolioError::UpdateFailed(e.to_string()))?
            .map(|p| p.owner_id);

        match authorize(&principal, DocumentAction::Mutate { owner_id }) {
            AccessDecision::Allowed if owner_id.is_some() => {}
            _ => return Err(UpdatePortfolioError::Unauthorized),
        }

        // Always runs, so last_edited_at bumps even for a pure child
        // replacement.
        self.portfolio_repository
            .update_portfolio(
                portfolio_id,
                UpdatePortfolioData {
                    title: input.title,
                    layout: input.layout.map(|l| l.as_str().to_string()),
                    is_published: input.is_published,
                    cv_id: input.cv_id,
                    theme_id: input.theme_id,
                    custom_domain: input.custom_domain,
                },
            )
            .await
            .map_err(|e| UpdatePortfolioError::UpdateFailed(e.to_string()))?;

        let mut skipped_projects = Vec::new();
        let mut skipped_blocks = Vec::new();
        if let Some(projects) = input.projects {
            self.replace_projects(portfolio_id, projects, &mut skipped_projects)
                .await?;
        }
        if let Some(blocks) = input.blocks {
            self.replace_blocks(portfolio_id, blocks, &mut skipped_blocks)
                .await?;
        }

        let rows = self
            .portfolio_repository
            .fetch_aggregate(portfolio_id)
            .await
            .map_err(|e| UpdatePortfolioError::UpdateFailed(e.to_string()))?
            .ok_or_else(|| {
                UpdatePortfolioError::UpdateFailed("portfolio vanished mid-update".to_string())
            })?;

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

        self.revalidator.mark_stale("/portfolios").await;

        Ok(UpdatePortfolioOutcome {
            document: assemble_portfolio(
                rows.portfolio,
                rows.projects,
                rows.blocks,
                personal_info,
            ),
            skipped_projects,
            skipped_blocks,
        })
    }
}
