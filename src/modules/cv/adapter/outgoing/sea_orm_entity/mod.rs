pub mod cv_items;
pub mod cv_sections;
pub mod cvs;
