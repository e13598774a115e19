use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::cv::application::ports::incoming::use_cases::ListCvsError;
use crate::modules::identity::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::identity::application::resolve::resolve_principal;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/cvs")]
pub async fn list_cvs_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    let principal = resolve_principal(data.profile_query.as_ref(), user.user_id).await;

    match data.cv.list.execute(principal).await {
        Ok(summaries) => ApiResponse::success(summaries),

        Err(ListCvsError::RepositoryError(e)) => {
            error!("Repository error listing CVs: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use chrono::Utc;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use uuid::Uuid;

    use crate::modules::cv::application::ports::incoming::use_cases::ListCvsUseCase;
    use crate::modules::cv::domain::entities::CvSummary;
    use crate::modules::identity::application::policy::Principal;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::bearer_token_for;

    struct FixedList {
        summaries: Vec<CvSummary>,
    }

    #[async_trait]
    impl ListCvsUseCase for FixedList {
        async fn execute(
            &self,
            _principal: Principal,
        ) -> Result<Vec<CvSummary>, ListCvsError> {
            Ok(self.summaries.clone())
        }
    }

    #[actix_web::test]
    async fn list_returns_the_summaries() {
        let now = Utc::now();
        let state = TestAppStateBuilder::new()
            .with_list_cvs(Arc::new(FixedList {
                summaries: vec![CvSummary {
                    id: Uuid::new_v4(),
                    title: "My CV".to_string(),
                    slug: "my-cv".to_string(),
                    language: "en".to_string(),
                    is_public: false,
                    created_at: now,
                    last_edited_at: now,
                }],
            }))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .app_data(web::Data::new(state.token_provider()))
                .service(list_cvs_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/cvs")
            .insert_header((
                "Authorization",
                format!("Bearer {}", bearer_token_for(Uuid::new_v4())),
            ))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"][0]["slug"], json!("my-cv"));
    }
}
