use async_trait::async_trait;
use std::collections::HashSet;

use crate::gallery::application::domain::entities::{GalleryTag, OrderedPhoto};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PhotoOrderQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait PhotoOrderQuery: Send + Sync {
    /// Every suppressed photo id, across all tags.
    async fn list_blacklist(&self) -> Result<HashSet<String>, PhotoOrderQueryError>;

    /// Order records for `tag` sorted by position then insertion time,
    /// each with its variants and description attached.
    async fn list_ordered(&self, tag: GalleryTag)
        -> Result<Vec<OrderedPhoto>, PhotoOrderQueryError>;
}
