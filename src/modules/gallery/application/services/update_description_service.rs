use async_trait::async_trait;

use crate::gallery::application::ports::{
    incoming::use_cases::{
        PhotoDescription, UpdateDescriptionCommand, UpdateDescriptionError,
        UpdateDescriptionUseCase,
    },
    outgoing::db::PhotoOrderRepository,
};

pub struct UpdateDescriptionService<R>
where
    R: PhotoOrderRepository,
{
    repository: R,
}

impl<R> UpdateDescriptionService<R>
where
    R: PhotoOrderRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateDescriptionUseCase for UpdateDescriptionService<R>
where
    R: PhotoOrderRepository,
{
    async fn execute(
        &self,
        command: UpdateDescriptionCommand,
    ) -> Result<PhotoDescription, UpdateDescriptionError> {
        self.repository
            .upsert_description(command.photo_id(), command.description())
            .await
            .map_err(|e| {
                tracing::error!("Saving description for {} failed: {}", command.photo_id(), e);
                UpdateDescriptionError::from(e)
            })?;

        Ok(PhotoDescription {
            photo_id: command.photo_id().to_string(),
            description: command.description().to_string(),
        })
    }
}
