use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::modules::analytics::application::ports::incoming::use_cases::GetStatsError;
use crate::modules::identity::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::identity::application::resolve::resolve_principal;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/portfolios/{id}/stats")]
pub async fn portfolio_stats_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let portfolio_id = path.into_inner();
    let principal = resolve_principal(data.profile_query.as_ref(), user.user_id).await;

    match data.analytics.stats.execute(principal, portfolio_id).await {
        Ok(snapshot) => ApiResponse::success(snapshot),

        Err(GetStatsError::Forbidden) => {
            ApiResponse::forbidden("FORBIDDEN", "Not your portfolio")
        }

        Err(GetStatsError::RepositoryError(e)) => {
            error!(
                "Repository error fetching stats for portfolio {}: {}",
                portfolio_id, e
            );
            ApiResponse::internal_error()
        }
    }
}
