use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::identity::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::identity::application::resolve::resolve_principal;
use crate::modules::portfolio::application::ports::incoming::use_cases::ListPortfoliosError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/portfolios")]
pub async fn list_portfolios_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    let principal = resolve_principal(data.profile_query.as_ref(), user.user_id).await;

    match data.portfolio.list.execute(principal).await {
        Ok(summaries) => ApiResponse::success(summaries),

        Err(ListPortfoliosError::RepositoryError(e)) => {
            error!("Repository error listing portfolios: {}", e);
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
    use crate::modules::portfolio::application::ports::incoming::use_cases::ListPortfoliosUseCase;
    use crate::modules::portfolio::domain::entities::{LayoutKind, PortfolioSummary};
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::bearer_token_for;

    struct FixedList {
        summaries: Vec<PortfolioSummary>,
    }

    #[async_trait]
    impl ListPortfoliosUseCase for FixedList {
        async fn execute(
            &self,
            _principal: Principal,
        ) -> Result<Vec<PortfolioSummary>, ListPortfoliosError> {
            Ok(self.summaries.clone())
        }
    }

    #[actix_web::test]
    async fn list_returns_the_summaries() {
        let now = Utc::now();
        let state = TestAppStateBuilder::new()
            .with_list_portfolios(Arc::new(FixedList {
                summaries: vec![PortfolioSummary {
                    id: Uuid::new_v4(),
                    title: "My Portfolio".to_string(),
                    slug: "my-portfolio".to_string(),
                    layout: LayoutKind::Developer,
                    is_published: true,
                    created_at: now,
                    last_edited_at: now,
                }],
            }))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .app_data(web::Data::new(state.token_provider()))
                .service(list_portfolios_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/portfolios")
            .insert_header((
                "Authorization",
                format!("Bearer {}", bearer_token_for(Uuid::new_v4())),
            ))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"][0]["slug"], json!("my-portfolio"));
        assert_eq!(body["data"][0]["layout"], json!("developer"));
    }
}
