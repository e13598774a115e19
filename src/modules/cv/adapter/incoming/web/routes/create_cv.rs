use actix_web::{post, web, Responder};
use tracing::error;

use crate::modules::cv::application::ports::incoming::use_cases::{
    CreateCvError, CreateCvInput,
};
use crate::modules::identity::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::identity::application::resolve::resolve_principal;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/api/cvs")]
pub async fn create_cv_handler(
    user: AuthenticatedUser,
    req: web::Json<CreateCvInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    let principal = resolve_principal(data.profile_query.as_ref(), user.user_id).await;

    match data.cv.create.execute(principal, req.into_inner()).await {
        Ok(outcome) => ApiResponse::created(outcome),

        Err(CreateCvError::CreationFailed(e)) => {
            error!("Storage error creating CV: {}", e);
            ApiResponse::internal_error()
        }
    }
}
