use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::identity::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::profile::application::ports::incoming::use_cases::FetchProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/profile")]
pub async fn get_profile_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.fetch_profile.execute(user.user_id).await {
        Ok(profile) => ApiResponse::success(profile),

        Err(FetchProfileError::NotFound) => {
            ApiResponse::not_found("PROFILE_NOT_FOUND", "Profile not found")
        }

        Err(FetchProfileError::RepositoryError(e)) => {
            error!("Repository error fetching profile: {}", e);
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

    use crate::modules::profile::application::ports::incoming::use_cases::FetchProfileUseCase;
    use crate::modules::profile::domain::entities::{PersonalInfo, Profile};
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::bearer_token_for;

    struct FixedFetch {
        profile: Profile,
    }

    #[async_trait]
    impl FetchProfileUseCase for FixedFetch {
        async fn execute(&self, _user_id: Uuid) -> Result<Profile, FetchProfileError> {
            Ok(self.profile.clone())
        }
    }

    #[actix_web::test]
    async fn returns_the_stored_profile() {
        let user_id = Uuid::new_v4();
        let state = TestAppStateBuilder::new()
            .with_fetch_profile(Arc::new(FixedFetch {
                profile: Profile {
                    user_id,
                    personal: PersonalInfo {
                        full_name: "Ada Lovelace".to_string(),
                        headline: "Engineer".to_string(),
                        ..PersonalInfo::default()
                    },
                    is_admin: false,
                    created_at: Utc::now(),
                    updated_at: Utc::now(),
                },
            }))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .app_data(web::Data::new(state.token_provider()))
                .service(get_profile_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/profile")
            .insert_header((
                "Authorization",
                format!("Bearer {}", bearer_token_for(user_id)),
            ))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["data"]["full_name"], json!("Ada Lovelace"));
    }

    #[actix_web::test]
    async fn missing_profile_answers_404() {
        // The default stub has no stored profile.
        let state = TestAppStateBuilder::new().build();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .app_data(web::Data::new(state.token_provider()))
                .service(get_profile_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/profile")
            .insert_header((
                "Authorization",
                format!("Bearer {}", bearer_token_for(Uuid::new_v4())),
            ))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], json!("PROFILE_NOT_FOUND"));
    }

    #[actix_web::test]
    async fn missing_token_answers_401() {
        let state = TestAppStateBuilder::new().build();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .app_data(web::Data::new(state.token_provider()))
                .service(get_profile_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/profile").to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
