use async_trait::async_trait;

use crate::gallery::application::ports::{
    incoming::use_cases::{DeletePhotoCommand, DeletePhotoError, DeletePhotoUseCase, PhotoDeleted},
    outgoing::db::PhotoOrderRepository,
};

pub struct DeletePhotoService<R>
where
    R: PhotoOrderRepository,
{
    repository: R,
}

impl<R> DeletePhotoService<R>
where
    R: PhotoOrderRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeletePhotoUseCase for DeletePhotoService<R>
where
    R: PhotoOrderRepository,
{
    async fn execute(&self, command: DeletePhotoCommand) -> Result<PhotoDeleted, DeletePhotoError> {
        let deleted = self
            .repository
            .delete_photo(command.photo_id())
            .await
            .map_err(|e| {
                tracing::error!("Deleting photo {} failed: {}", command.photo_id(), e);
                DeletePhotoError::from(e)
            })?;

        tracing::info!(
            "Photo {} blacklisted (order record removed: {})",
            deleted.photo_id,
            deleted.had_order_record
        );
        Ok(PhotoDeleted::from(deleted))
    }
}
