pub mod profile_query;
mod profile_repository;

pub use profile_query::{ProfileQuery, ProfileQueryError};
pub use profile_repository::{ProfileRepository, ProfileRepositoryError, UpsertProfileData};
