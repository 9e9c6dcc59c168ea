use async_trait::async_trait;

use crate::content::application::domain::entities::{AboutPage, Article, WeddingPackage};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ContentQuery: Send + Sync {
    /// Newest first.
    async fn list_articles(&self) -> Result<Vec<Article>, ContentQueryError>;

    async fn find_article_by_slug(&self, slug: &str)
        -> Result<Option<Article>, ContentQueryError>;

    /// Bio row (if any) plus credentials by `sort_order`.
    async fn get_about(&self) -> Result<AboutPage, ContentQueryError>;

    /// By `sort_order`.
    async fn list_wedding_packages(&self) -> Result<Vec<WeddingPackage>, ContentQueryError>;
}
