use std::sync::Arc;

use crate::modules::cv::application::ports::incoming::use_cases::{
    CreateCvUseCase, DeleteCvUseCase, GetCvUseCase, ListCvsUseCase, UpdateCvUseCase,
};

#[derive(Clone)]
pub struct CvUseCases {
    pub create: Arc<dyn CreateCvUseCase + Send + Sync>,
    pub list: Arc<dyn ListCvsUseCase + Send + Sync>,
    pub get: Arc<dyn GetCvUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateCvUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteCvUseCase + Send + Sync>,
}
