mod fetch_profile;
mod update_profile;

pub use fetch_profile::{FetchProfileError, FetchProfileUseCase};
pub use update_profile::{UpdateProfileError, UpdateProfileUseCase};
