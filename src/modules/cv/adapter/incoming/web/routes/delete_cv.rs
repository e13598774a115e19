use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::modules::cv::application::ports::incoming::use_cases::DeleteCvError;
use crate::modules::identity::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::identity::application::resolve::resolve_principal;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/cvs/{id}")]
pub async fn delete_cv_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let cv_id = path.into_inner();
    let principal = resolve_principal(data.profile_query.as_ref(), user.user_id).await;

    match data.cv.delete.execute(principal, cv_id).await {
        Ok(()) => ApiResponse::<()>::no_content(),

        // Missing and foreign CVs answer identically
        Err(DeleteCvError::Unauthorized) => {
            ApiResponse::not_found("CV_NOT_FOUND", "CV not found")
        }

        Err(DeleteCvError::DeletionFailed(e)) => {
            error!("Storage error deleting CV {}: {}", cv_id, e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    use crate::modules::cv::application::ports::incoming::use_cases::DeleteCvUseCase;
    use crate::modules::identity::application::policy::Principal;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::bearer_token_for;

    struct RecordingDelete {
        calls: Mutex<Vec<Uuid>>,
        result: Result<(), DeleteCvError>,
    }

    #[async_trait]
    impl DeleteCvUseCase for RecordingDelete {
        async fn execute(
            &self,
            _principal: Principal,
            cv_id: Uuid,
        ) -> Result<(), DeleteCvError> {
            self.calls.lock().unwrap().push(cv_id);
            self.result.clone()
        }
    }

    #[actix_web::test]
    async fn successful_delete_returns_204() {
        let delete = Arc::new(RecordingDelete {
            calls: Mutex::new(Vec::new()),
            result: Ok(()),
        });
        let state = TestAppStateBuilder::new()
            .with_delete_cv(delete.clone())
            .build();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .app_data(web::Data::new(state.token_provider()))
                .service(delete_cv_handler),
        )
        .await;

        let cv_id = Uuid::new_v4();
        let req = test::TestRequest::delete()
            .uri(&format!("/api/cvs/{}", cv_id))
            .insert_header((
                "Authorization",
                format!("Bearer {}", bearer_token_for(Uuid::new_v4())),
            ))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert_eq!(*delete.calls.lock().unwrap(), vec![cv_id]);
    }

    #[actix_web::test]
    async fn denied_delete_answers_404() {
        let state = TestAppStateBuilder::new()
            .with_delete_cv(Arc::new(RecordingDelete {
                calls: Mutex::new(Vec::new()),
                result: Err(DeleteCvError::Unauthorized),
            }))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .app_data(web::Data::new(state.token_provider()))
                .service(delete_cv_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/cvs/{}", Uuid::new_v4()))
            .insert_header((
                "Authorization",
                format!("Bearer {}", bearer_token_for(Uuid::new_v4())),
            ))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
