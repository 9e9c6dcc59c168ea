use async_trait::async_trait;

use crate::gallery::application::domain::entities::UploadedAsset;

#[derive(Debug, Clone)]
pub struct MediaUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
    /// Media-host tag(s) to attach, comma separated.
    pub tags: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MediaUploadError {
    #[error("Upload rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Malformed upload response: {0}")]
    Decode(String),
}

#[async_trait]
pub trait MediaUploader: Send + Sync {
    async fn upload(&self, upload: MediaUpload) -> Result<UploadedAsset, MediaUploadError>;
}
