use async_trait::async_trait;

use crate::gallery::application::domain::{draft::OrderEntry, entities::GalleryTag};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrderRecord {
    pub id: String,
    pub tag: GalleryTag,
    pub position: i32,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVariantRecord {
    pub id: String,
    pub parent_id: String,
    pub url: String,
    pub position: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletedPhoto {
    pub photo_id: String,
    /// False when the photo was remote-only and had no order record.
    pub had_order_record: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PhotoOrderRepositoryError {
    #[error("Record already exists: {0}")]
    AlreadyExists(String),

    #[error("Record not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait PhotoOrderRepository: Send + Sync {
    async fn insert_photo(&self, record: NewOrderRecord) -> Result<(), PhotoOrderRepositoryError>;

    /// Insert-or-replace by id in one batched statement.
    async fn upsert_order(&self, entries: Vec<OrderEntry>)
        -> Result<u64, PhotoOrderRepositoryError>;

    /// Removes the order record and blacklists the id atomically.
    async fn delete_photo(&self, photo_id: &str)
        -> Result<DeletedPhoto, PhotoOrderRepositoryError>;

    async fn insert_variant(
        &self,
        record: NewVariantRecord,
    ) -> Result<(), PhotoOrderRepositoryError>;

    async fn delete_variant(&self, variant_id: &str) -> Result<(), PhotoOrderRepositoryError>;

    async fn upsert_description(
        &self,
        photo_id: &str,
        description: &str,
    ) -> Result<(), PhotoOrderRepositoryError>;
}
