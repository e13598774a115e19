use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::modules::cv::application::ports::incoming::use_cases::{
    DeleteCvError, DeleteCvUseCase,
};
use crate::modules::cv::application::ports::outgoing::cv_repository::{
    CvRepository, CvRepositoryError,
};
use crate::modules::identity::application::policy::{
    authorize, AccessDecision, DocumentAction, Principal,
};
use crate::shared::revalidate::RevalidationHook;

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct DeleteCvService<R, H>
where
    R: CvRepository,
    H: RevalidationHook,
{
    cv_repository: R,
    revalidator: H,
}

impl<R, H> DeleteCvService<R, H>
where
    R: CvRepository,
    H: RevalidationHook,
{
    pub fn new(cv_repository: R, revalidator: H) -> Self {
        Self {
            cv_repository,
            revalidator,
        }
    }
}

#[async_trait]
impl<R, H> DeleteCvUseCase for DeleteCvService<R, H>
where
    R: CvRepository + Send + Sync,
    H: RevalidationHook + Send + Sync,
{
    async fn execute(&self, principal: Principal, cv_id: Uuid) -> Result<(), DeleteCvError> {
        // Ownership resolves before any privilege assumption; the
        // lookup happens even for admins so the cascade targets a real
        // row.
        let owner_id = self
            .cv_repository
            .find_cv(cv_id)
            .await
            .map_err(|e| DeleteCvError::DeletionFailed(e.to_string()))?
            .map(|cv| cv.owner_id);

        match authorize(&principal, DocumentAction::Mutate { owner_id }) {
            AccessDecision::Allowed if owner_id.is_some() => {}
            _ => return Err(DeleteCvError::Unauthorized),
        }

        self.cv_repository
            .delete_cv(cv_id)
            .await
            .map_err(|e| match e {
                CvRepositoryError::NotFound => DeleteCvError::Unauthorized,
                other => DeleteCvError::DeletionFailed(other.to_string()),
            })?;

        info!(%cv_id, "CV deleted");
        self.revalidator.mark_stale("/cvs").await;
        Ok(())
    }
}
