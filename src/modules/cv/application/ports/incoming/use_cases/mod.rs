pub mod create_cv;
pub mod delete_cv;
pub mod get_cv;
pub mod list_cvs;
pub mod update_cv;

pub use create_cv::{
    CreateCvError, CreateCvInput, CreateCvOutcome, CreateCvUseCase, NewSectionInput,
    SkippedItem, SkippedSection,
};
pub use delete_cv::{DeleteCvError, DeleteCvUseCase};
pub use get_cv::{GetCvError, GetCvUseCase};
pub use list_cvs::{ListCvsError, ListCvsUseCase};
pub use update_cv::{UpdateCvError, UpdateCvInput, UpdateCvOutcome, UpdateCvUseCase};
