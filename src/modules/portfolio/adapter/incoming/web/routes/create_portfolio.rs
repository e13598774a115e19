use actix_web::{post, web, Responder};
use tracing::error;

use crate::modules::identity::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::identity::application::resolve::resolve_principal;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    CreatePortfolioError, CreatePortfolioInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/api/portfolios")]
pub async fn create_portfolio_handler(
    user: AuthenticatedUser,
    req: web::Json<CreatePortfolioInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    let principal = resolve_principal(data.profile_query.as_ref(), user.user_id).await;

    match data
        .portfolio
        .create
        .execute(principal, req.into_inner())
        .await
    {
        Ok(outcome) => ApiResponse::created(outcome),

        Err(CreatePortfolioError::CreationFailed(e)) => {
            error!("Storage error creating portfolio: {}", e);
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

    use crate::modules::identity::application::policy::Principal;
    use crate::modules::portfolio::application::ports::incoming::use_cases::{
        CreatePortfolioOutcome, CreatePortfolioUseCase,
    };
    use crate::modules::portfolio::domain::entities::{LayoutKind, PortfolioDocument};
    use crate::modules::profile::domain::entities::PersonalInfo;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::bearer_token_for;

    struct FixedCreate {
        result: Result<CreatePortfolioOutcome, CreatePortfolioError>,
    }

    #[async_trait]
    impl CreatePortfolioUseCase for FixedCreate {
        async fn execute(
            &self,
            _principal: Principal,
            _input: CreatePortfolioInput,
        ) -> Result<CreatePortfolioOutcome, CreatePortfolioError> {
            self.result.clone()
        }
    }

    fn sample_outcome(owner_id: Uuid) -> CreatePortfolioOutcome {
        let now = Utc::now();
        CreatePortfolioOutcome {
            document: PortfolioDocument {
                id: Uuid::new_v4(),
                owner_id,
                title: "My Portfolio".to_string(),
                slug: "my-portfolio".to_string(),
                layout: LayoutKind::Minimal,
                is_published: false,
                cv_id: None,
                theme_id: None,
                custom_domain: None,
                created_at: now,
                last_edited_at: now,
                personal_info: PersonalInfo::default(),
                projects: vec![],
                blocks: vec![],
            },
            skipped_projects: vec![],
            skipped_blocks: vec![],
        }
    }

    #[actix_web::test]
    async fn create_returns_201_with_the_document() {
        let user_id = Uuid::new_v4();
        let state = TestAppStateBuilder::new()
            .with_create_portfolio(Arc::new(FixedCreate {
                result: Ok(sample_outcome(user_id)),
            }))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .app_data(web::Data::new(state.token_provider()))
                .service(create_portfolio_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/portfolios")
            .insert_header((
                "Authorization",
                format!("Bearer {}", bearer_token_for(user_id)),
            ))
            .set_json(json!({"title": "My Portfolio"}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["data"]["slug"], json!("my-portfolio"));
    }

    #[actix_web::test]
    async fn storage_failure_returns_500() {
        let state = TestAppStateBuilder::new()
            .with_create_portfolio(Arc::new(FixedCreate {
                result: Err(CreatePortfolioError::CreationFailed("boom".to_string())),
            }))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .app_data(web::Data::new(state.token_provider()))
                .service(create_portfolio_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/portfolios")
            .insert_header((
                "Authorization",
                format!("Bearer {}", bearer_token_for(Uuid::new_v4())),
            ))
            .set_json(json!({"title": "My Portfolio"}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn missing_token_returns_401() {
        let state = TestAppStateBuilder::new().build();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .app_data(web::Data::new(state.token_provider()))
                .service(create_portfolio_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/portfolios")
            .set_json(json!({"title": "My Portfolio"}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
