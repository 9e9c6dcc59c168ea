use async_trait::async_trait;

use crate::gallery::application::ports::{
    incoming::use_cases::{DeleteVariantCommand, DeleteVariantError, DeleteVariantUseCase},
    outgoing::db::PhotoOrderRepository,
};

pub struct DeleteVariantService<R>
where
    R: PhotoOrderRepository,
{
    repository: R,
}

impl<R> DeleteVariantService<R>
where
    R: PhotoOrderRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteVariantUseCase for DeleteVariantService<R>
where
    R: PhotoOrderRepository,
{
    async fn execute(&self, command: DeleteVariantCommand) -> Result<(), DeleteVariantError> {
        self.repository
            .delete_variant(command.variant_id())
            .await
            .map_err(DeleteVariantError::from)?;

        tracing::info!("Variant {} deleted", command.variant_id());
        Ok(())
    }
}
