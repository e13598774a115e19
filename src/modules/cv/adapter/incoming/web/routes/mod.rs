pub mod create_cv;
pub mod delete_cv;
pub mod get_cv;
pub mod list_cvs;
pub mod update_cv;
