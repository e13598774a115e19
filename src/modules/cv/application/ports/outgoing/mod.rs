pub mod cv_repository;
