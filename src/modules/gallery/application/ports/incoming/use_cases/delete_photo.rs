use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::gallery::application::{
    domain::entities::{non_blank_id, EmptyIdError},
    ports::outgoing::db::{DeletedPhoto, PhotoOrderRepositoryError},
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeletePhotoError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<PhotoOrderRepositoryError> for DeletePhotoError {
    fn from(err: PhotoOrderRepositoryError) -> Self {
        Self::RepositoryError(err.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct DeletePhotoCommand {
    photo_id: String,
}

impl DeletePhotoCommand {
    pub fn new(photo_id: &str) -> Result<Self, EmptyIdError> {
        Ok(Self {
            photo_id: non_blank_id(photo_id)?,
        })
    }

    pub fn photo_id(&self) -> &str {
        &self.photo_id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PhotoDeleted {
    pub photo_id: String,
    pub blacklisted: bool,
    pub had_order_record: bool,
}

impl From<DeletedPhoto> for PhotoDeleted {
    fn from(deleted: DeletedPhoto) -> Self {
        Self {
            photo_id: deleted.photo_id,
            blacklisted: true,
            had_order_record: deleted.had_order_record,
        }
    }
}

#[async_trait]
pub trait DeletePhotoUseCase: Send + Sync {
    async fn execute(&self, command: DeletePhotoCommand) -> Result<PhotoDeleted, DeletePhotoError>;
}
