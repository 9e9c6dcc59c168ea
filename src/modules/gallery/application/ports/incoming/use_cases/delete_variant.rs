use async_trait::async_trait;

use crate::gallery::application::{
    domain::entities::{non_blank_id, EmptyIdError},
    ports::outgoing::db::PhotoOrderRepositoryError,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeleteVariantError {
    #[error("Variant not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<PhotoOrderRepositoryError> for DeleteVariantError {
    fn from(err: PhotoOrderRepositoryError) -> Self {
        match err {
            PhotoOrderRepositoryError::NotFound => Self::NotFound,
            other => Self::RepositoryError(other.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DeleteVariantCommand {
    variant_id: String,
}

impl DeleteVariantCommand {
    pub fn new(variant_id: &str) -> Result<Self, EmptyIdError> {
        Ok(Self {
            variant_id: non_blank_id(variant_id)?,
        })
    }

    pub fn variant_id(&self) -> &str {
        &self.variant_id
    }
}

#[async_trait]
pub trait DeleteVariantUseCase: Send + Sync {
    async fn execute(&self, command: DeleteVariantCommand) -> Result<(), DeleteVariantError>;
}
