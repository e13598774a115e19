use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::modules::cv::application::ports::incoming::use_cases::GetCvError;
use crate::modules::identity::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::identity::application::resolve::resolve_principal;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/cvs/{id}")]
pub async fn get_cv_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let cv_id = path.into_inner();
    let principal = resolve_principal(data.profile_query.as_ref(), user.user_id).await;

    match data.cv.get.execute(principal, cv_id).await {
        Ok(document) => ApiResponse::success(document),

        // Missing and foreign CVs answer identically
        Err(GetCvError::Unauthorized) => ApiResponse::not_found("CV_NOT_FOUND", "CV not found"),

        Err(GetCvError::RepositoryError(e)) => {
            error!("Repository error fetching CV {}: {}", cv_id, e);
            ApiResponse::internal_error()
        }
    }
}
