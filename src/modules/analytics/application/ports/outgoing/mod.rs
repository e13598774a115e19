pub mod analytics_repository;
