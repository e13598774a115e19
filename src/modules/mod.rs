pub mod analytics;
pub mod cv;
pub mod identity;
pub mod portfolio;
pub mod profile;
