use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::identity::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::profile::application::ports::incoming::use_cases::UpdateProfileError;
use crate::modules::profile::application::ports::outgoing::UpsertProfileData;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub full_name: Option<String>,
    pub headline: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
}

#[put("/api/profile")]
pub async fn update_profile_handler(
    user: AuthenticatedUser,
    req: web::Json<UpdateProfileRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let upsert = UpsertProfileData {
        full_name: req.full_name,
        headline: req.headline,
        email: req.email,
        phone: req.phone,
        location: req.location,
        website: req.website,
        bio: req.bio,
        avatar_url: req.avatar_url,
    };

    match data.update_profile.execute(user.user_id, upsert).await {
        Ok(profile) => ApiResponse::success(profile),

        Err(UpdateProfileError::RepositoryError(e)) => {
            error!("Repository error updating profile: {}", e);
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
    use std::sync::{Arc, Mutex};
    use uuid::Uuid;

    use crate::modules::profile::application::ports::incoming::use_cases::UpdateProfileUseCase;
    use crate::modules::profile::domain::entities::{PersonalInfo, Profile};
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::bearer_token_for;

    struct CapturingUpdate {
        captured: Mutex<Option<UpsertProfileData>>,
    }

    #[async_trait]
    impl UpdateProfileUseCase for CapturingUpdate {
        async fn execute(
            &self,
            user_id: Uuid,
            data: UpsertProfileData,
        ) -> Result<Profile, UpdateProfileError> {
            let personal = PersonalInfo {
                full_name: data.full_name.clone().unwrap_or_default(),
                ..PersonalInfo::default()
            };
            *self.captured.lock().unwrap() = Some(data);

            Ok(Profile {
                user_id,
                personal,
                is_admin: false,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            })
        }
    }

    #[actix_web::test]
    async fn passes_provided_fields_through() {
        let update = Arc::new(CapturingUpdate {
            captured: Mutex::new(None),
        });
        let state = TestAppStateBuilder::new()
            .with_update_profile(update.clone())
            .build();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .app_data(web::Data::new(state.token_provider()))
                .service(update_profile_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/profile")
            .insert_header((
                "Authorization",
                format!("Bearer {}", bearer_token_for(Uuid::new_v4())),
            ))
            .set_json(json!({"full_name": "Ada Lovelace", "headline": "Engineer"}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["full_name"], json!("Ada Lovelace"));

        let captured = update.captured.lock().unwrap().take().unwrap();
        assert_eq!(captured.full_name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(captured.headline.as_deref(), Some("Engineer"));
        assert_eq!(captured.bio, None);
    }

    #[actix_web::test]
    async fn storage_failure_answers_500() {
        // The default stub rejects with a repository error.
        let state = TestAppStateBuilder::new().build();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .app_data(web::Data::new(state.token_provider()))
                .service(update_profile_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/profile")
            .insert_header((
                "Authorization",
                format!("Bearer {}", bearer_token_for(Uuid::new_v4())),
            ))
            .set_json(json!({"full_name": "Ada Lovelace"}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
