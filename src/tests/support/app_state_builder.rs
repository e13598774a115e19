use std::sync::Arc;

use crate::modules::analytics::application::analytics_use_cases::AnalyticsUseCases;
use crate::modules::analytics::application::ports::incoming::use_cases::{
    GetStatsUseCase, RecordEventUseCase,
};
use crate::modules::cv::application::cv_use_cases::CvUseCases;
use crate::modules::cv::application::ports::incoming::use_cases::{
    CreateCvUseCase, DeleteCvUseCase, GetCvUseCase, ListCvsUseCase, UpdateCvUseCase,
};
use crate::modules::portfolio::application::portfolio_use_cases::PortfolioUseCases;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    CreatePortfolioUseCase, DeletePortfolioUseCase, GetPortfolioUseCase, ListPortfoliosUseCase,
    UpdatePortfolioUseCase,
};
use crate::modules::profile::application::ports::incoming::use_cases::{
    FetchProfileUseCase, UpdateProfileUseCase,
};
use crate::modules::profile::application::ports::outgoing::ProfileQuery;
use crate::tests::support::auth_helper::test_token_service;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Assembles an `AppState` where every use case is a stub, then lets a
/// test swap in the one (or few) it actually exercises. The token
/// provider is always the shared test JWT service, so tokens minted by
/// `bearer_token_for` verify against the built state.
pub struct TestAppStateBuilder {
    profile_query: Arc<dyn ProfileQuery + Send + Sync>,
    fetch_profile: Arc<dyn FetchProfileUseCase + Send + Sync>,
    update_profile: Arc<dyn UpdateProfileUseCase + Send + Sync>,
    create_cv: Arc<dyn CreateCvUseCase + Send + Sync>,
    list_cvs: Arc<dyn ListCvsUseCase + Send + Sync>,
    get_cv: Arc<dyn GetCvUseCase + Send + Sync>,
    update_cv: Arc<dyn UpdateCvUseCase + Send + Sync>,
    delete_cv: Arc<dyn DeleteCvUseCase + Send + Sync>,
    create_portfolio: Arc<dyn CreatePortfolioUseCase + Send + Sync>,
    list_portfolios: Arc<dyn ListPortfoliosUseCase + Send + Sync>,
    get_portfolio: Arc<dyn GetPortfolioUseCase + Send + Sync>,
    update_portfolio: Arc<dyn UpdatePortfolioUseCase + Send + Sync>,
    delete_portfolio: Arc<dyn DeletePortfolioUseCase + Send + Sync>,
    record_event: Arc<dyn RecordEventUseCase + Send + Sync>,
    get_stats: Arc<dyn GetStatsUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self {
            profile_query: Arc::new(StubProfileQuery),
            fetch_profile: Arc::new(StubFetchProfileUseCase),
            update_profile: Arc::new(StubUpdateProfileUseCase),
            create_cv: Arc::new(StubCreateCvUseCase),
            list_cvs: Arc::new(StubListCvsUseCase),
            get_cv: Arc::new(StubGetCvUseCase),
            update_cv: Arc::new(StubUpdateCvUseCase),
            delete_cv: Arc::new(StubDeleteCvUseCase),
            create_portfolio: Arc::new(StubCreatePortfolioUseCase),
            list_portfolios: Arc::new(StubListPortfoliosUseCase),
            get_portfolio: Arc::new(StubGetPortfolioUseCase),
            update_portfolio: Arc::new(StubUpdatePortfolioUseCase),
            delete_portfolio: Arc::new(StubDeletePortfolioUseCase),
            record_event: Arc::new(StubRecordEventUseCase),
            get_stats: Arc::new(StubGetStatsUseCase),
        }
    }

    pub fn with_profile_query(mut self, query: Arc<dyn ProfileQuery + Send + Sync>) -> Self {
        self.profile_query = query;
        self
    }

    pub fn with_fetch_profile(mut self, uc: Arc<dyn FetchProfileUseCase + Send + Sync>) -> Self {
        self.fetch_profile = uc;
        self
    }

    pub fn with_update_profile(mut self, uc: Arc<dyn UpdateProfileUseCase + Send + Sync>) -> Self {
        self.update_profile = uc;
        self
    }

    pub fn with_create_cv(mut self, uc: Arc<dyn CreateCvUseCase + Send + Sync>) -> Self {
        self.create_cv = uc;
        self
    }

    pub fn with_list_cvs(mut self, uc: Arc<dyn ListCvsUseCase + Send + Sync>) -> Self {
        self.list_cvs = uc;
        self
    }

    pub fn with_get_cv(mut self, uc: Arc<dyn GetCvUseCase + Send + Sync>) -> Self {
        self.get_cv = uc;
        self
    }

    pub fn with_update_cv(mut self, uc: Arc<dyn UpdateCvUseCase + Send + Sync>) -> Self {
        self.update_cv = uc;
        self
    }

    pub fn with_delete_cv(mut self, uc: Arc<dyn DeleteCvUseCase + Send + Sync>) -> Self {
        self.delete_cv = uc;
        self
    }

    pub fn with_create_portfolio(
        mut self,
        uc: Arc<dyn CreatePortfolioUseCase + Send + Sync>,
    ) -> Self {
        self.create_portfolio = uc;
        self
    }

    pub fn with_list_portfolios(
        mut self,
        uc: Arc<dyn ListPortfoliosUseCase + Send + Sync>,
    ) -> Self {
        self.list_portfolios = uc;
        self
    }

    pub fn with_get_portfolio(mut self, uc: Arc<dyn GetPortfolioUseCase + Send + Sync>) -> Self {
        self.get_portfolio = uc;
        self
    }

    pub fn with_update_portfolio(
        mut self,
        uc: Arc<dyn UpdatePortfolioUseCase + Send + Sync>,
    ) -> Self {
        self.update_portfolio = uc;
        self
    }

    pub fn with_delete_portfolio(
        mut self,
        uc: Arc<dyn DeletePortfolioUseCase + Send + Sync>,
    ) -> Self {
        self.delete_portfolio = uc;
        self
    }

    pub fn with_record_event(mut self, uc: Arc<dyn RecordEventUseCase + Send + Sync>) -> Self {
        self.record_event = uc;
        self
    }

    pub fn with_get_stats(mut self, uc: Arc<dyn GetStatsUseCase + Send + Sync>) -> Self {
        self.get_stats = uc;
        self
    }

    pub fn build(self) -> AppState {
        AppState {
            profile_query: self.profile_query,
            fetch_profile: self.fetch_profile,
            update_profile: self.update_profile,
            cv: CvUseCases {
                create: self.create_cv,
                list: self.list_cvs,
                get: self.get_cv,
                update: self.update_cv,
                delete: self.delete_cv,
            },
            portfolio: PortfolioUseCases {
                create: self.create_portfolio,
                list: self.list_portfolios,
                get: self.get_portfolio,
                update: self.update_portfolio,
                delete: self.delete_portfolio,
            },
            analytics: AnalyticsUseCases {
                record: self.record_event,
                stats: self.get_stats,
            },
            token_provider: Arc::new(test_token_service()),
        }
    }
}
