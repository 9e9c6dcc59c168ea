use std::sync::Arc;

use crate::gallery::application::domain::policies::upload_policy::UploadPolicy;
use crate::gallery::application::ports::incoming::use_cases::{
    AddVariantUseCase, DeletePhotoUseCase, DeleteVariantUseCase, PreviewOrderUseCase,
    ResolveGalleryUseCase, SaveOrderUseCase, UpdateDescriptionUseCase, UploadPhotoUseCase,
};

#[derive(Clone)]
pub struct GalleryUseCases {
    pub resolve: Arc<dyn ResolveGalleryUseCase + Send + Sync>,
    pub save_order: Arc<dyn SaveOrderUseCase + Send + Sync>,
    pub preview_order: Arc<dyn PreviewOrderUseCase + Send + Sync>,
    pub delete_photo: Arc<dyn DeletePhotoUseCase + Send + Sync>,
    pub upload_photo: Arc<dyn UploadPhotoUseCase + Send + Sync>,
    pub add_variant: Arc<dyn AddVariantUseCase + Send + Sync>,
    pub delete_variant: Arc<dyn DeleteVariantUseCase + Send + Sync>,
    pub update_description: Arc<dyn UpdateDescriptionUseCase + Send + Sync>,
    pub upload_policy: UploadPolicy,
}
