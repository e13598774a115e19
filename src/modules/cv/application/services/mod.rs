pub mod create_cv_service;
pub mod delete_cv_service;
pub mod get_cv_service;
pub mod list_cvs_service;
pub mod update_cv_service;
