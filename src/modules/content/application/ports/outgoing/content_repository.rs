use async_trait::async_trait;
use uuid::Uuid;

use crate::content::application::domain::entities::{
    AboutContent, Article, Credential, NewArticle, WeddingPackage,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentRepositoryError {
    #[error("Slug already taken: {0}")]
    SlugTaken(String),

    #[error("Record not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ContentRepository: Send + Sync {
    async fn insert_article(&self, article: NewArticle) -> Result<Article, ContentRepositoryError>;

    async fn delete_article(&self, id: Uuid) -> Result<(), ContentRepositoryError>;

    /// Upserts the bio row and replaces every credential, atomically.
    /// Each credential's `sort_order` is its index.
    async fn replace_about(
        &self,
        content: AboutContent,
        credentials: Vec<Credential>,
    ) -> Result<(), ContentRepositoryError>;

    /// Insert-or-replace by id.
    async fn upsert_wedding_packages(
        &self,
        packages: Vec<WeddingPackage>,
    ) -> Result<u64, ContentRepositoryError>;
}
