use async_trait::async_trait;

use crate::gallery::application::domain::entities::{GalleryPhoto, GalleryTag};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveGalleryError {
    /// Serving unfiltered data would leak deleted photos, so this is fatal.
    #[error("Blacklist unavailable: {0}")]
    BlacklistUnavailable(String),
}

#[derive(Debug, Clone)]
pub struct ResolveGalleryCommand {
    tag: Option<GalleryTag>,
}

impl ResolveGalleryCommand {
    pub fn new(tag: Option<GalleryTag>) -> Self {
        Self { tag }
    }

    pub fn tag(&self) -> Option<GalleryTag> {
        self.tag
    }
}

#[async_trait]
pub trait ResolveGalleryUseCase: Send + Sync {
    async fn execute(
        &self,
        command: ResolveGalleryCommand,
    ) -> Result<Vec<GalleryPhoto>, ResolveGalleryError>;
}
