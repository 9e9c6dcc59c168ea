use async_trait::async_trait;

use crate::gallery::application::domain::entities::{GalleryTag, RemoteAsset};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MediaListingError {
    #[error("Media host responded with status {0}")]
    Unavailable(u16),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Malformed listing: {0}")]
    Decode(String),
}

/// Read-only listing of the assets the media host holds for a tag.
#[async_trait]
pub trait MediaListing: Send + Sync {
    async fn list_by_tag(&self, tag: GalleryTag) -> Result<Vec<RemoteAsset>, MediaListingError>;
}
