use async_trait::async_trait;
use tracing::warn;
use uuid::Uuid;

use crate::modules::cv::application::ports::incoming::use_cases::{GetCvError, GetCvUseCase};
use crate::modules::cv::application::ports::outgoing::cv_repository::CvRepository;
use crate::modules::cv::domain::assemble::assemble_document;
use crate::modules::cv::domain::entities::CvDocument;
use crate::modules::identity::application::policy::{
    authorize, AccessDecision, DocumentAction, Principal,
};
use crate::modules::profile::application::ports::outgoing::profile_query::ProfileQuery;

pub struct GetCvService<R, P>
where
    R: CvRepository,
    P: ProfileQuery,
{
    cv_repository: R,
    profile_query: P,
}

impl<R, P> GetCvService<R, P>
where
    R: CvRepository,
    P: ProfileQuery,
{
    pub fn new(cv_repository: R, profile_query: P) -> Self {
        Self {
            cv_repository,
            profile_query,
        }
    }
}

#[async_trait]
impl<R, P> GetCvUseCase for GetCvService<R, P>
where
    R: CvRepository + Send + Sync,
    P: ProfileQuery + Send + Sync,
{
    async fn execute(
        &self,
        principal: Principal,
        cv_id: Uuid,
    ) -> Result<CvDocument, GetCvError> {
        let rows = self
            .cv_repository
            .fetch_aggregate(cv_id)
            .await
            .map_err(|e| GetCvError::RepositoryError(e.to_string()))?;

        let Some(rows) = rows else {
            return Err(GetCvError::Unauthorized);
        };

        let decision = authorize(
            &principal,
            DocumentAction::ReadOwned {
                owner_id: Some(rows.cv.owner_id),
            },
        );
        if decision != AccessDecision::Allowed {
            return Err(GetCvError::Unauthorized);
        }

        let personal_info = match self.profile_query.personal_info(rows.cv.owner_id).await {
            Ok(info) => info,
            Err(e) => {
                warn!(user_id = %rows.cv.owner_id, error = %e, "personal info lookup failed, using defaults");
                Default::default()
            }
        };

        Ok(assemble_document(
            rows.cv,
            rows.sections,
            rows.items,
            personal_info,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::modules::cv::application::ports::outgoing::cv_repository::{
        CvAggregateRows, CvRepositoryError, NewCvRow, NewItemRow, NewSectionRow, UpdateCvData,
    };
    use crate::modules::cv::domain::assemble::{CvRow, ItemRow, SectionRow};
    use crate::modules::profile::application::ports::outgoing::profile_query::{
        ProfileQueryError,
    };
    use crate::modules::profile::domain::entities::{PersonalInfo, Profile};
    use chrono::Utc;

    struct FixedAggregateRepo {
        rows: Option<CvAggregateRows>,
    }

    #[async_trait]
    impl CvRepository for FixedAggregateRepo {
        async fn insert_cv(&self, _data: NewCvRow) -> Result<CvRow, CvRepositoryError> {
            unimplemented!()
        }

        async fn insert_section(
            &self,
            _data: NewSectionRow,
        ) -> Result<SectionRow, CvRepositoryError> {
            unimplemented!()
        }

        async fn insert_item(&self, _data: NewItemRow) -> Result<ItemRow, CvRepositoryError> {
            unimplemented!()
        }

        async fn slug_exists(
            &self,
            _owner_id: Uuid,
            _slug: &str,
        ) -> Result<bool, CvRepositoryError> {
            unimplemented!()
        }

        async fn list_by_owner(&self, _owner_id: Uuid) -> Result<Vec<CvRow>, CvRepositoryError> {
            unimplemented!()
        }

        async fn find_cv(&self, _cv_id: Uuid) -> Result<Option<CvRow>, CvRepositoryError> {
            unimplemented!()
        }

        async fn fetch_aggregate(
            &self,
            _cv_id: Uuid,
        ) -> Result<Option<CvAggregateRows>, CvRepositoryError> {
            Ok(self.rows.clone())
        }

        async fn update_cv(
            &self,
            _cv_id: Uuid,
            _data: UpdateCvData,
        ) -> Result<CvRow, CvRepositoryError> {
            unimplemented!()
        }

        async fn delete_sections(&self, _cv_id: Uuid) -> Result<(), CvRepositoryError> {
            unimplemented!()
        }

        async fn delete_cv(&self, _cv_id: Uuid) -> Result<(), CvRepositoryError> {
            unimplemented!()
        }
    }

    struct NamedProfileQuery(&'static str);

    #[async_trait]
    impl ProfileQuery for NamedProfileQuery {
        async fn fetch(&self, _user_id: Uuid) -> Result<Option<Profile>, ProfileQueryError> {
            Ok(None)
        }

        async fn personal_info(
            &self,
            _user_id: Uuid,
        ) -> Result<PersonalInfo, ProfileQueryError> {
            Ok(PersonalInfo {
                full_name: self.0.to_string(),
                ..Default::default()
            })
        }

        async fn is_admin(&self, _user_id: Uuid) -> Result<bool, ProfileQueryError> {
            Ok(false)
        }
    }

    fn aggregate(owner_id: Uuid) -> CvAggregateRows {
        let now = Utc::now();
        let cv_id = Uuid::new_v4();
        let section_id = Uuid::new_v4();
        CvAggregateRows {
            cv: CvRow {
                id: cv_id,
                owner_id,
                title: "My CV".to_string(),
                slug: "my-cv".to_string(),
                language: "en".to_string(),
                template_id: None,
                theme_id: None,
                is_public: false,
                created_at: now,
                last_edited_at: now,
            },
            sections: vec![SectionRow {
                id: section_id,
                cv_id,
                kind: "experience".to_string(),
                title: "Experience".to_string(),
                sort_order: 0,
                is_visible: true,
            }],
            items: vec![ItemRow {
                id: Uuid::new_v4(),
                section_id,
                sort_order: 0,
                data: match json!({"company": "Acme"}) {
                    serde_json::Value::Object(map) => map,
                    _ => unreachable!(),
                },
            }],
        }
    }

    #[tokio::test]
    async fn owner_reads_the_assembled_document() {
        let owner = Uuid::new_v4();
        let rows = aggregate(owner);
        let cv_id = rows.cv.id;
        let svc = GetCvService::new(
            FixedAggregateRepo { rows: Some(rows) },
            NamedProfileQuery("Jane Doe"),
        );

        let doc = svc.execute(Principal::user(owner), cv_id).await.unwrap();

        assert_eq!(doc.slug, "my-cv");
        assert_eq!(doc.personal_info.full_name, "Jane Doe");
        assert_eq!(doc.sections.len(), 1);
        assert_eq!(doc.sections[0].items.len(), 1);
    }

    #[tokio::test]
    async fn foreign_reader_is_denied() {
        let rows = aggregate(Uuid::new_v4());
        let cv_id = rows.cv.id;
        let svc = GetCvService::new(
            FixedAggregateRepo { rows: Some(rows) },
            NamedProfileQuery("Jane Doe"),
        );

        let err = svc
            .execute(Principal::user(Uuid::new_v4()), cv_id)
            .await
            .unwrap_err();
        assert!(matches!(err, GetCvError::Unauthorized));
    }

    #[tokio::test]
    async fn missing_cv_denies_identically() {
        let svc = GetCvService::new(
            FixedAggregateRepo { rows: None },
            NamedProfileQuery("Jane Doe"),
        );

        let err = svc
            .execute(Principal::user(Uuid::new_v4()), Uuid::new_v4())
            .await
            .unwrap_err();
        assert!(matches!(err, GetCvError::Unauthorized));
    }
}
