use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::gallery::application::{
    domain::{
        entities::{non_blank_id, GalleryTag},
        policies::upload_policy::UploadPolicy,
    },
    ports::incoming::use_cases::{UploadCommandError, UploadPhotoError},
};

/// Variants share the upload failure taxonomy of primary photos.
pub type AddVariantError = UploadPhotoError;

#[derive(Debug, Clone)]
pub struct AddVariantCommand {
    parent_id: String,
    tag: GalleryTag,
    file_name: String,
    bytes: Vec<u8>,
}

impl AddVariantCommand {
    pub fn new(
        parent_id: &str,
        tag: GalleryTag,
        file_name: &str,
        bytes: Vec<u8>,
        policy: &UploadPolicy,
    ) -> Result<Self, UploadCommandError> {
        let parent_id = non_blank_id(parent_id).map_err(|_| UploadCommandError::MissingParentId)?;
        let file_name = policy.validate(file_name, bytes.len())?;
        Ok(Self {
            parent_id,
            tag,
            file_name,
            bytes,
        })
    }

    pub fn parent_id(&self) -> &str {
        &self.parent_id
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
pub struct AddedVariant {
    pub id: String,
    pub parent_id: String,
    pub url: String,
    pub position: i32,
}

#[async_trait]
pub trait AddVariantUseCase: Send + Sync {
    async fn execute(&self, command: AddVariantCommand) -> Result<AddedVariant, AddVariantError>;
}

