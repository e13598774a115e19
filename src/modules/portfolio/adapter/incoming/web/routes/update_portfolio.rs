use actix_web::{put, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::modules::identity::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::identity::application::resolve::resolve_principal;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    UpdatePortfolioError, UpdatePortfolioInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[put("/api/portfolios/{id}")]
pub async fn update_portfolio_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdatePortfolioInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    let portfolio_id = path.into_inner();
    let principal = resolve_principal(data.profile_query.as_ref(), user.user_id).await;

    match data
        .portfolio
        .update
        .execute(principal, portfolio_id, req.into_inner())
        .await
    {
        Ok(outcome) => ApiResponse::success(outcome),

        Err(UpdatePortfolioError::Unauthorized) => {
            ApiResponse::not_found("PORTFOLIO_NOT_FOUND", "Portfolio not found")
        }

        Err(UpdatePortfolioError::Validation(msg)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }

        Err(UpdatePortfolioError::UpdateFailed(e)) => {
            error!("Storage error updating portfolio {}: {}", portfolio_id, e);
            ApiResponse::internal_error()
        }
    }
}
