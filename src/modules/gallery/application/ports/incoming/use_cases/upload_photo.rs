use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::gallery::application::{
    domain::{
        entities::GalleryTag,
        policies::upload_policy::{UploadPolicy, UploadPolicyError},
    },
    ports::outgoing::{db::PhotoOrderRepositoryError, media_host::MediaUploadError},
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadCommandError {
    #[error("Missing parent photo id")]
    MissingParentId,

    #[error(transparent)]
    InvalidFile(#[from] UploadPolicyError),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadPhotoError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Photo already recorded: {0}")]
    AlreadyExists(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<MediaUploadError> for UploadPhotoError {
    fn from(err: MediaUploadError) -> Self {
        Self::UploadFailed(err.to_string())
    }
}

impl From<PhotoOrderRepositoryError> for UploadPhotoError {
    fn from(err: PhotoOrderRepositoryError) -> Self {
        match err {
            PhotoOrderRepositoryError::AlreadyExists(id) => Self::AlreadyExists(id),
            other => Self::RepositoryError(other.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UploadPhotoCommand {
    tag: GalleryTag,
    file_name: String,
    bytes: Vec<u8>,
}

impl UploadPhotoCommand {
    pub fn new(
        tag: GalleryTag,
        file_name: &str,
        bytes: Vec<u8>,
        policy: &UploadPolicy,
    ) -> Result<Self, UploadCommandError> {
        let file_name = policy.validate(file_name, bytes.len())?;
        Ok(Self {
            tag,
            file_name,
            bytes,
        })
    }

    pub fn tag(&self) -> GalleryTag {
        self.tag
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct UploadedPhoto {
    pub id: String,
    pub url: String,
    pub tag: GalleryTag,
    pub position: i32,
}

#[async_trait]
pub trait UploadPhotoUseCase: Send + Sync {
    async fn execute(&self, command: UploadPhotoCommand) -> Result<UploadedPhoto, UploadPhotoError>;
}
