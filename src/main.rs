pub mod health;
pub mod modules;
pub mod shared;

use std::env;
use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::modules::analytics::adapter::outgoing::analytics_repository_postgres::AnalyticsRepositoryPostgres;
use crate::modules::analytics::application::analytics_use_cases::AnalyticsUseCases;
use crate::modules::analytics::application::services::get_stats_service::GetStatsService;
use crate::modules::analytics::application::services::record_event_service::RecordEventService;
use crate::modules::cv::adapter::outgoing::cv_repository_postgres::CvRepositoryPostgres;
use crate::modules::cv::application::cv_use_cases::CvUseCases;
use crate::modules::cv::application::services::create_cv_service::CreateCvService;
use crate::modules::cv::application::services::delete_cv_service::DeleteCvService;
use crate::modules::cv::application::services::get_cv_service::GetCvService;
use crate::modules::cv::application::services::list_cvs_service::ListCvsService;
use crate::modules::cv::application::services::update_cv_service::UpdateCvService;
use crate::modules::identity::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::modules::identity::application::ports::outgoing::TokenProvider;
use crate::modules::portfolio::adapter::outgoing::portfolio_repository_postgres::PortfolioRepositoryPostgres;
use crate::modules::portfolio::application::portfolio_use_cases::PortfolioUseCases;
use crate::modules::portfolio::application::services::create_portfolio_service::CreatePortfolioService;
use crate::modules::portfolio::application::services::delete_portfolio_service::DeletePortfolioService;
use crate::modules::portfolio::application::services::get_portfolio_service::GetPortfolioService;
use crate::modules::portfolio::application::services::list_portfolios_service::ListPortfoliosService;
use crate::modules::portfolio::application::services::update_portfolio_service::UpdatePortfolioService;
use crate::modules::profile::adapter::outgoing::{ProfileQueryPostgres, ProfileRepositoryPostgres};
use crate::modules::profile::application::ports::incoming::use_cases::{
    FetchProfileUseCase, UpdateProfileUseCase,
};
use crate::modules::profile::application::ports::outgoing::ProfileQuery;
use crate::modules::profile::application::services::{FetchProfileService, UpdateProfileService};
use crate::shared::api::custom_json_config;
use crate::shared::revalidate::LoggingRevalidator;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    /// Shared privilege lookup, used by the route layer to resolve the
    /// acting principal before any ownership-checked call.
    pub profile_query: Arc<dyn ProfileQuery + Send + Sync>,
    pub fetch_profile: Arc<dyn FetchProfileUseCase + Send + Sync>,
    pub update_profile: Arc<dyn UpdateProfileUseCase + Send + Sync>,
    pub cv: CvUseCases,
    pub portfolio: PortfolioUseCases,
    pub analytics: AnalyticsUseCases,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl AppState {
    /// The provider the auth extractor verifies bearer tokens against.
    pub fn token_provider(&self) -> Arc<dyn TokenProvider + Send + Sync> {
        Arc::clone(&self.token_provider)
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let environment = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", environment);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");

    let server_url = format!("{host}:{port}");
    info!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // Outgoing adapters
    let cv_repo = CvRepositoryPostgres::new(Arc::clone(&db_arc));
    let portfolio_repo = PortfolioRepositoryPostgres::new(Arc::clone(&db_arc));
    let analytics_repo = AnalyticsRepositoryPostgres::new(Arc::clone(&db_arc));
    let profile_query = ProfileQueryPostgres::new(Arc::clone(&db_arc));
    let profile_repo = ProfileRepositoryPostgres::new(Arc::clone(&db_arc));

    // Profile use cases
    let fetch_profile = FetchProfileService::new(profile_query.clone());
    let update_profile = UpdateProfileService::new(profile_repo);

    // CV use cases
    let cv = CvUseCases {
        create: Arc::new(CreateCvService::new(
            cv_repo.clone(),
            profile_query.clone(),
            LoggingRevalidator,
        )),
        list: Arc::new(ListCvsService::new(cv_repo.clone())),
        get: Arc::new(GetCvService::new(cv_repo.clone(), profile_query.clone())),
        update: Arc::new(UpdateCvService::new(
            cv_repo.clone(),
            profile_query.clone(),
            LoggingRevalidator,
        )),
        delete: Arc::new(DeleteCvService::new(cv_repo, LoggingRevalidator)),
    };

    // Portfolio use cases
    let portfolio = PortfolioUseCases {
        create: Arc::new(CreatePortfolioService::new(
            portfolio_repo.clone(),
            profile_query.clone(),
            LoggingRevalidator,
        )),
        list: Arc::new(ListPortfoliosService::new(portfolio_repo.clone())),
        get: Arc::new(GetPortfolioService::new(
            portfolio_repo.clone(),
            profile_query.clone(),
        )),
        update: Arc::new(UpdatePortfolioService::new(
            portfolio_repo.clone(),
            profile_query.clone(),
            LoggingRevalidator,
        )),
        delete: Arc::new(DeletePortfolioService::new(
            portfolio_repo.clone(),
            LoggingRevalidator,
        )),
    };

    // Analytics use cases
    let analytics = AnalyticsUseCases {
        record: Arc::new(RecordEventService::new(analytics_repo.clone())),
        stats: Arc::new(GetStatsService::new(analytics_repo, portfolio_repo)),
    };

    let jwt_service = JwtTokenService::new(JwtConfig::from_env());
    let token_provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);

    let state = AppState {
        profile_query: Arc::new(profile_query),
        fetch_profile: Arc::new(fetch_profile),
        update_profile: Arc::new(update_profile),
        cv,
        portfolio,
        analytics,
        token_provider: Arc::clone(&token_provider),
    };

    // Clone db_arc for use in HttpServer closure
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(custom_json_config())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Profile
    cfg.service(crate::modules::profile::adapter::incoming::web::routes::get_profile_handler);
    cfg.service(crate::modules::profile::adapter::incoming::web::routes::update_profile_handler);
    // CV
    cfg.service(crate::modules::cv::adapter::incoming::web::routes::create_cv::create_cv_handler);
    cfg.service(crate::modules::cv::adapter::incoming::web::routes::list_cvs::list_cvs_handler);
    cfg.service(crate::modules::cv::adapter::incoming::web::routes::get_cv::get_cv_handler);
    cfg.service(crate::modules::cv::adapter::incoming::web::routes::update_cv::update_cv_handler);
    cfg.service(crate::modules::cv::adapter::incoming::web::routes::delete_cv::delete_cv_handler);
    // Portfolio
    cfg.service(
        crate::modules::portfolio::adapter::incoming::web::routes::create_portfolio::create_portfolio_handler,
    );
    cfg.service(
        crate::modules::portfolio::adapter::incoming::web::routes::list_portfolios::list_portfolios_handler,
    );
    cfg.service(
        crate::modules::portfolio::adapter::incoming::web::routes::get_portfolio::get_portfolio_handler,
    );
    cfg.service(
        crate::modules::portfolio::adapter::incoming::web::routes::update_portfolio::update_portfolio_handler,
    );
    cfg.service(
        crate::modules::portfolio::adapter::incoming::web::routes::delete_portfolio::delete_portfolio_handler,
    );
    // Analytics
    cfg.service(crate::modules::analytics::adapter::incoming::web::routes::track::track_handler);
    cfg.service(
        crate::modules::analytics::adapter::incoming::web::routes::portfolio_stats::portfolio_stats_handler,
    );
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
