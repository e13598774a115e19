mod fetch_profile_service;
mod update_profile_service;

pub use fetch_profile_service::FetchProfileService;
pub use update_profile_service::UpdateProfileService;
