use async_trait::async_trait;

use crate::gallery::application::{
    domain::entities::NEW_VARIANT_POSITION,
    ports::{
        incoming::use_cases::{AddVariantCommand, AddVariantError, AddVariantUseCase, AddedVariant},
        outgoing::{
            db::{NewVariantRecord, PhotoOrderRepository},
            media_host::{MediaUpload, MediaUploader},
        },
    },
};

pub struct AddVariantService<U, R>
where
    U: MediaUploader,
    R: PhotoOrderRepository,
{
    uploader: U,
    repository: R,
}

impl<U, R> AddVariantService<U, R>
where
    U: MediaUploader,
    R: PhotoOrderRepository,
{
    pub fn new(uploader: U, repository: R) -> Self {
        Self {
            uploader,
            repository,
        }
    }
}

#[async_trait]
impl<U, R> AddVariantUseCase for AddVariantService<U, R>
where
    U: MediaUploader,
    R: PhotoOrderRepository,
{
    async fn execute(&self, command: AddVariantCommand) -> Result<AddedVariant, AddVariantError> {
        let parent_id = command.parent_id().to_string();
        let tags = command.tag().variant_tag();
        let file_name = command.file_name().to_string();

        let asset = self
            .uploader
            .upload(MediaUpload {
                file_name: file_name.clone(),
                bytes: command.into_bytes(),
                tags,
            })
            .await
            .map_err(|e| {
                tracing::warn!("Variant upload '{}' for {} failed: {}", file_name, parent_id, e);
                AddVariantError::from(e)
            })?;

        self.repository
            .insert_variant(NewVariantRecord {
                id: asset.public_id.clone(),
                parent_id: parent_id.clone(),
                url: asset.secure_url.clone(),
                position: NEW_VARIANT_POSITION,
            })
            .await
            .map_err(|e| {
                tracing::error!("Recording variant {} failed: {}", asset.public_id, e);
                AddVariantError::from(e)
            })?;

        Ok(AddedVariant {
            id: asset.public_id,
            parent_id,
            url: asset.secure_url,
            position: NEW_VARIANT_POSITION,
        })
    }
}
