use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::gallery::application::{
    domain::entities::non_blank_id, ports::outgoing::db::PhotoOrderRepositoryError,
};

pub const MAX_DESCRIPTION_CHARS: usize = 2000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateDescriptionCommandError {
    #[error("Photo id must not be empty")]
    EmptyPhotoId,

    #[error("Description too long (max {max} characters, got {actual})")]
    TooLong { max: usize, actual: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateDescriptionError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<PhotoOrderRepositoryError> for UpdateDescriptionError {
    fn from(err: PhotoOrderRepositoryError) -> Self {
        Self::RepositoryError(err.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct UpdateDescriptionCommand {
    photo_id: String,
    description: String,
}

impl UpdateDescriptionCommand {
    pub fn new(photo_id: &str, description: &str) -> Result<Self, UpdateDescriptionCommandError> {
        let photo_id =
            non_blank_id(photo_id).map_err(|_| UpdateDescriptionCommandError::EmptyPhotoId)?;

        let description = description.trim().to_string();
        let chars = description.chars().count();
        if chars > MAX_DESCRIPTION_CHARS {
            return Err(UpdateDescriptionCommandError::TooLong {
                max: MAX_DESCRIPTION_CHARS,
                actual: chars,
            });
        }

        Ok(Self {
            photo_id,
            description,
        })
    }

    pub fn photo_id(&self) -> &str {
        &self.photo_id
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PhotoDescription {
    pub photo_id: String,
    pub description: String,
}

#[async_trait]
pub trait UpdateDescriptionUseCase: Send + Sync {
    async fn execute(
        &self,
        command: UpdateDescriptionCommand,
    ) -> Result<PhotoDescription, UpdateDescriptionError>;
}
