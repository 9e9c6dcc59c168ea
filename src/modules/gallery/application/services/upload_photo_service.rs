use async_trait::async_trait;

use crate::gallery::application::{
    domain::entities::NEW_PHOTO_POSITION,
    ports::{
        incoming::use_cases::{
            UploadPhotoCommand, UploadPhotoError, UploadPhotoUseCase, UploadedPhoto,
        },
        outgoing::{
            db::{NewOrderRecord, PhotoOrderRepository},
            media_host::{MediaUpload, MediaUploader},
        },
    },
};

pub struct UploadPhotoService<U, R>
where
    U: MediaUploader,
    R: PhotoOrderRepository,
{
    uploader: U,
    repository: R,
}

impl<U, R> UploadPhotoService<U, R>
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
impl<U, R> UploadPhotoUseCase for UploadPhotoService<U, R>
where
    U: MediaUploader,
    R: PhotoOrderRepository,
{
    async fn execute(&self, command: UploadPhotoCommand) -> Result<UploadedPhoto, UploadPhotoError> {
        let tag = command.tag();
        let file_name = command.file_name().to_string();

        let asset = self
            .uploader
            .upload(MediaUpload {
                file_name: file_name.clone(),
                bytes: command.into_bytes(),
                tags: tag.to_string(),
            })
            .await
            .map_err(|e| {
                tracing::warn!("Upload of '{}' to '{}' failed: {}", file_name, tag, e);
                UploadPhotoError::from(e)
            })?;

        self.repository
            .insert_photo(NewOrderRecord {
                id: asset.public_id.clone(),
                tag,
                position: NEW_PHOTO_POSITION,
                url: asset.secure_url.clone(),
            })
            .await
            .map_err(|e| {
                tracing::error!("Recording uploaded photo {} failed: {}", asset.public_id, e);
                UploadPhotoError::from(e)
            })?;

        tracing::info!("Uploaded photo {} to '{}'", asset.public_id, tag);
        Ok(UploadedPhoto {
            id: asset.public_id,
            url: asset.secure_url,
            tag,
            position: NEW_PHOTO_POSITION,
        })
    }
}
