use std::sync::Arc;

use crate::modules::portfolio::application::ports::incoming::use_cases::{
    CreatePortfolioUseCase, DeletePortfolioUseCase, GetPortfolioUseCase, ListPortfoliosUseCase,
    UpdatePortfolioUseCase,
};

#[derive(Clone)]
pub struct PortfolioUseCases {
    pub create: Arc<dyn CreatePortfolioUseCase + Send + Sync>,
    pub list: Arc<dyn ListPortfoliosUseCase + Send + Sync>,
    pub get: Arc<dyn GetPortfolioUseCase + Send + Sync>,
    pub update: Arc<dyn UpdatePortfolioUseCase + Send + Sync>,
    pub delete: Arc<dyn DeletePortfolioUseCase + Send + Sync>,
}
