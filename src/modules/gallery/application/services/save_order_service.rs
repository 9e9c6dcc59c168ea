use async_trait::async_trait;

use crate::gallery::application::ports::{
    incoming::use_cases::{SaveOrderCommand, SaveOrderError, SaveOrderUseCase, SavedOrder},
    outgoing::db::PhotoOrderRepository,
};

pub struct SaveOrderService<R>
where
    R: PhotoOrderRepository,
{
    repository: R,
}

impl<R> SaveOrderService<R>
where
    R: PhotoOrderRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> SaveOrderUseCase for SaveOrderService<R>
where
    R: PhotoOrderRepository,
{
    async fn execute(&self, command: SaveOrderCommand) -> Result<SavedOrder, SaveOrderError> {
        let tag = command.tag();
        let entries = command.draft().to_order_entries(tag);

        if entries.is_empty() {
            return Ok(SavedOrder { tag, saved: 0 });
        }

        let saved = entries.len();
        self.repository.upsert_order(entries).await.map_err(|e| {
            tracing::error!("Saving order for '{}' failed: {}", tag, e);
            SaveOrderError::from(e)
        })?;

        tracing::info!("Saved order for '{}' ({} photos)", tag, saved);
        Ok(SavedOrder { tag, saved })
    }
}
