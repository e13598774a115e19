use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::modules::identity::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::identity::application::resolve::resolve_principal;
use crate::modules::portfolio::application::ports::incoming::use_cases::DeletePortfolioError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/portfolios/{id}")]
pub async fn delete_portfolio_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let portfolio_id = path.into_inner();
    let principal = resolve_principal(data.profile_query.as_ref(), user.user_id).await;

    match data.portfolio.delete.execute(principal, portfolio_id).await {
        Ok(()) => ApiResponse::<()>::no_content(),

        // Missing and foreign portfolios answer identically
        Err(DeletePortfolioError::Unauthorized) => {
            ApiResponse::not_found("PORTFOLIO_NOT_FOUND", "Portfolio not found")
        }

        Err(DeletePortfolioError::DeletionFailed(e)) => {
            error!("Storage error deleting portfolio {}: {}", portfolio_id, e);
            ApiResponse::internal_error()
        }
    }
}
