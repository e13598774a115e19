use actix_web::{put, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::modules::cv::application::ports::incoming::use_cases::{
    UpdateCvError, UpdateCvInput,
};
use crate::modules::identity::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::identity::application::resolve::resolve_principal;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[put("/api/cvs/{id}")]
pub async fn update_cv_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdateCvInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    let cv_id = path.into_inner();
    let principal = resolve_principal(data.profile_query.as_ref(), user.user_id).await;

    match data.cv.update.execute(principal, cv_id, req.into_inner()).await {
        Ok(outcome) => ApiResponse::success(outcome),

        Err(UpdateCvError::Unauthorized) => {
            ApiResponse::not_found("CV_NOT_FOUND", "CV not found")
        }

        Err(UpdateCvError::Validation(msg)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }

        Err(UpdateCvError::UpdateFailed(e)) => {
            error!("Storage error updating CV {}: {}", cv_id, e);
            ApiResponse::internal_error()
        }
    }
}
