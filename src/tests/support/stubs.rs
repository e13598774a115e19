//! Default stand-ins for every use case the app state carries. Route
//! tests override the one they exercise and leave the rest on these.

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::analytics::application::ports::incoming::use_cases::{
    GetStatsError, GetStatsUseCase, RecordEventError, RecordEventInput, RecordEventUseCase,
    RequestMeta, StatsSnapshot,
};
use crate::modules::cv::application::ports::incoming::use_cases::{
    CreateCvError, CreateCvInput, CreateCvOutcome, CreateCvUseCase, DeleteCvError,
    DeleteCvUseCase, GetCvError, GetCvUseCase, ListCvsError, ListCvsUseCase, UpdateCvError,
    UpdateCvInput, UpdateCvOutcome, UpdateCvUseCase,
};
use crate::modules::cv::domain::entities::{CvDocument, CvSummary};
use crate::modules::identity::application::policy::Principal;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    CreatePortfolioError, CreatePortfolioInput, CreatePortfolioOutcome, CreatePortfolioUseCase,
    DeletePortfolioError, DeletePortfolioUseCase, GetPortfolioError, GetPortfolioUseCase,
    ListPortfoliosError, ListPortfoliosUseCase, UpdatePortfolioError, UpdatePortfolioInput,
    UpdatePortfolioOutcome, UpdatePortfolioUseCase,
};
use crate::modules::portfolio::domain::entities::{PortfolioDocument, PortfolioSummary};
use crate::modules::profile::application::ports::incoming::use_cases::{
    FetchProfileError, FetchProfileUseCase, UpdateProfileError, UpdateProfileUseCase,
};
use crate::modules::profile::application::ports::outgoing::{
    ProfileQuery, ProfileQueryError, UpsertProfileData,
};
use crate::modules::profile::domain::entities::{PersonalInfo, Profile};

const NOT_WIRED: &str = "not wired in this test";

// ──────────────────────────────────────────────────────────
// Profile
// ──────────────────────────────────────────────────────────

/// No stored profile, no privilege. Principal resolution degrades to a
/// plain user, which is what most route tests want.
pub struct StubProfileQuery;

#[async_trait]
impl ProfileQuery for StubProfileQuery {
    async fn fetch(&self, _user_id: Uuid) -> Result<Option<Profile>, ProfileQueryError> {
        Ok(None)
    }

    async fn personal_info(&self, _user_id: Uuid) -> Result<PersonalInfo, ProfileQueryError> {
        Ok(PersonalInfo::default())
    }

    async fn is_admin(&self, _user_id: Uuid) -> Result<bool, ProfileQueryError> {
        Ok(false)
    }
}

pub struct StubFetchProfileUseCase;

#[async_trait]
impl FetchProfileUseCase for StubFetchProfileUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<Profile, FetchProfileError> {
        Err(FetchProfileError::NotFound)
    }
}

pub struct StubUpdateProfileUseCase;

#[async_trait]
impl UpdateProfileUseCase for StubUpdateProfileUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _data: UpsertProfileData,
    ) -> Result<Profile, UpdateProfileError> {
        Err(UpdateProfileError::RepositoryError(NOT_WIRED.to_string()))
    }
}

// ──────────────────────────────────────────────────────────
// CV
// ──────────────────────────────────────────────────────────

pub struct StubCreateCvUseCase;

#[async_trait]
impl CreateCvUseCase for StubCreateCvUseCase {
    async fn execute(
        &self,
        _principal: Principal,
        _input: CreateCvInput,
    ) -> Result<CreateCvOutcome, CreateCvError> {
        Err(CreateCvError::CreationFailed(NOT_WIRED.to_string()))
    }
}

pub struct StubListCvsUseCase;

#[async_trait]
impl ListCvsUseCase for StubListCvsUseCase {
    async fn execute(&self, _principal: Principal) -> Result<Vec<CvSummary>, ListCvsError> {
        Ok(vec![])
    }
}

pub struct StubGetCvUseCase;

#[async_trait]
impl GetCvUseCase for StubGetCvUseCase {
    async fn execute(
        &self,
        _principal: Principal,
        _cv_id: Uuid,
    ) -> Result<CvDocument, GetCvError> {
        Err(GetCvError::Unauthorized)
    }
}

pub struct StubUpdateCvUseCase;

#[async_trait]
impl UpdateCvUseCase for StubUpdateCvUseCase {
    async fn execute(
        &self,
        _principal: Principal,
        _cv_id: Uuid,
        _input: UpdateCvInput,
    ) -> Result<UpdateCvOutcome, UpdateCvError> {
        Err(UpdateCvError::Unauthorized)
    }
}

pub struct StubDeleteCvUseCase;

#[async_trait]
impl DeleteCvUseCase for StubDeleteCvUseCase {
    async fn execute(&self, _principal: Principal, _cv_id: Uuid) -> Result<(), DeleteCvError> {
        Err(DeleteCvError::Unauthorized)
    }
}

// ──────────────────────────────────────────────────────────
// Portfolio
// ──────────────────────────────────────────────────────────

pub struct StubCreatePortfolioUseCase;

#[async_trait]
impl CreatePortfolioUseCase for StubCreatePortfolioUseCase {
    async fn execute(
        &self,
        _principal: Principal,
        _input: CreatePortfolioInput,
    ) -> Result<CreatePortfolioOutcome, CreatePortfolioError> {
        Err(CreatePortfolioError::CreationFailed(NOT_WIRED.to_string()))
    }
}

pub struct StubListPortfoliosUseCase;

#[async_trait]
impl ListPortfoliosUseCase for StubListPortfoliosUseCase {
    async fn execute(
        &self,
        _principal: Principal,
    ) -> Result<Vec<PortfolioSummary>, ListPortfoliosError> {
        Ok(vec![])
    }
}

pub struct StubGetPortfolioUseCase;

#[async_trait]
impl GetPortfolioUseCase for StubGetPortfolioUseCase {
    async fn execute(
        &self,
        _principal: Principal,
        _portfolio_id: Uuid,
    ) -> Result<PortfolioDocument, GetPortfolioError> {
        Err(GetPortfolioError::Unauthorized)
    }
}

pub struct StubUpdatePortfolioUseCase;

#[async_trait]
impl UpdatePortfolioUseCase for StubUpdatePortfolioUseCase {
    async fn execute(
        &self,
        _principal: Principal,
        _portfolio_id: Uuid,
        _input: UpdatePortfolioInput,
    ) -> Result<UpdatePortfolioOutcome, UpdatePortfolioError> {
        Err(UpdatePortfolioError::Unauthorized)
    }
}

pub struct StubDeletePortfolioUseCase;

#[async_trait]
impl DeletePortfolioUseCase for StubDeletePortfolioUseCase {
    async fn execute(
        &self,
        _principal: Principal,
        _portfolio_id: Uuid,
    ) -> Result<(), DeletePortfolioError> {
        Err(DeletePortfolioError::Unauthorized)
    }
}

// ──────────────────────────────────────────────────────────
// Analytics
// ──────────────────────────────────────────────────────────

/// Tracking is fire-and-forget, so the default quietly accepts.
pub struct StubRecordEventUseCase;

#[async_trait]
impl RecordEventUseCase for StubRecordEventUseCase {
    async fn execute(
        &self,
        _input: RecordEventInput,
        _meta: RequestMeta,
    ) -> Result<(), RecordEventError> {
        Ok(())
    }
}

pub struct StubGetStatsUseCase;

#[async_trait]
impl GetStatsUseCase for StubGetStatsUseCase {
    async fn execute(
        &self,
        _principal: Principal,
        _portfolio_id: Uuid,
    ) -> Result<StatsSnapshot, GetStatsError> {
        Err(GetStatsError::Forbidden)
    }
}
