use async_trait::async_trait;

use crate::modules::cv::application::ports::incoming::use_cases::{ListCvsError, ListCvsUseCase};
use crate::modules::cv::application::ports::outgoing::cv_repository::CvRepository;
use crate::modules::cv::domain::entities::CvSummary;
use crate::modules::identity::application::policy::Principal;

pub struct ListCvsService<R>
where
    R: CvRepository,
{
    cv_repository: R,
}

impl<R> ListCvsService<R>
where
    R: CvRepository,
{
    pub fn new(cv_repository: R) -> Self {
        Self { cv_repository }
    }
}

#[async_trait]
impl<R> ListCvsUseCase for ListCvsService<R>
where
    R: CvRepository + Send + Sync,
{
    async fn execute(&self, principal: Principal) -> Result<Vec<CvSummary>, ListCvsError> {
        let rows = self
            .cv_repository
            .list_by_owner(principal.user_id)
            .await
            .map_err(|e| ListCvsError::RepositoryError(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|cv| CvSummary {
                id: cv.id,
                title: cv.title,
                slug: cv.slug,
                language: cv.language,
                is_public: cv.is_public,
                created_at: cv.created_at,
                last_edited_at: cv.last_edited_at,
            })
            .collect())
    }
}
