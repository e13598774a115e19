use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::modules::identity::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::identity::application::resolve::resolve_principal;
use crate::modules::portfolio::application::ports::incoming::use_cases::GetPortfolioError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/portfolios/{id}")]
pub async fn get_portfolio_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let portfolio_id = path.into_inner();
    let principal = resolve_principal(data.profile_query.as_ref(), user.user_id).await;

    match data.portfolio.get.execute(principal, portfolio_id).await {
        Ok(document) => ApiResponse::success(document),

        // Missing and foreign portfolios answer identically
        Err(GetPortfolioError::Unauthorized) => {
            ApiResponse::not_found("PORTFOLIO_NOT_FOUND", "Portfolio not found")
        }

        Err(GetPortfolioError::RepositoryError(e)) => {
            error!("Repository error fetching portfolio {}: {}", portfolio_id, e);
            ApiResponse::internal_error()
        }
    }
}
