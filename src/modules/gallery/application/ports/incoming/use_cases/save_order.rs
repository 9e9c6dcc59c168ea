use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::gallery::application::{
    domain::{
        draft::{DraftError, DraftItem, GalleryDraft},
        entities::GalleryTag,
    },
    ports::outgoing::db::PhotoOrderRepositoryError,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SaveOrderError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<PhotoOrderRepositoryError> for SaveOrderError {
    fn from(err: PhotoOrderRepositoryError) -> Self {
        Self::RepositoryError(err.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct SaveOrderCommand {
    tag: GalleryTag,
    draft: GalleryDraft,
}

impl SaveOrderCommand {
    pub fn new(tag: GalleryTag, items: Vec<DraftItem>) -> Result<Self, DraftError> {
        Ok(Self {
            tag,
            draft: GalleryDraft::new(items)?,
        })
    }

    pub fn tag(&self) -> GalleryTag {
        self.tag
    }

    pub fn draft(&self) -> &GalleryDraft {
        &self.draft
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct SavedOrder {
    pub tag: GalleryTag,
    pub saved: usize,
}

#[async_trait]
pub trait SaveOrderUseCase: Send + Sync {
    async fn execute(&self, command: SaveOrderCommand) -> Result<SavedOrder, SaveOrderError>;
}
