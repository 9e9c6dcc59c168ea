use async_trait::async_trait;
use uuid::Uuid;

use crate::content::application::{
    domain::entities::Article,
    ports::{
        incoming::use_cases::{
            CreateArticleCommand, CreateArticleError, CreateArticleUseCase, DeleteArticleError,
            DeleteArticleUseCase, GetArticleError, GetArticleUseCase, ListArticlesError,
            ListArticlesUseCase,
        },
        outgoing::{ContentQuery, ContentRepository},
    },
};

pub struct ListArticlesService<Q>
where
    Q: ContentQuery,
{
    query: Q,
}

impl<Q> ListArticlesService<Q>
where
    Q: ContentQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListArticlesUseCase for ListArticlesService<Q>
where
    Q: ContentQuery,
{
    async fn execute(&self) -> Result<Vec<Article>, ListArticlesError> {
        self.query.list_articles().await.map_err(|e| {
            tracing::error!("Listing articles failed: {}", e);
            ListArticlesError::from(e)
        })
    }
}

pub struct GetArticleService<Q>
where
    Q: ContentQuery,
{
    query: Q,
}

impl<Q> GetArticleService<Q>
where
    Q: ContentQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetArticleUseCase for GetArticleService<Q>
where
    Q: ContentQuery,
{
    async fn execute(&self, slug: &str) -> Result<Article, GetArticleError> {
        self.query
            .find_article_by_slug(slug)
            .await
            .map_err(|e| {
                tracing::error!("Loading article '{}' failed: {}", slug, e);
                GetArticleError::from(e)
            })?
            .ok_or(GetArticleError::NotFound)
    }
}

pub struct CreateArticleService<R>
where
    R: ContentRepository,
{
    repository: R,
}

impl<R> CreateArticleService<R>
where
    R: ContentRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateArticleUseCase for CreateArticleService<R>
where
    R: ContentRepository,
{
    async fn execute(&self, command: CreateArticleCommand) -> Result<Article, CreateArticleError> {
        let article = self
            .repository
            .insert_article(command.into_article())
            .await
            .map_err(CreateArticleError::from)?;

        tracing::info!("Article {} created with slug '{}'", article.id, article.slug);
        Ok(article)
    }
}

pub struct DeleteArticleService<R>
where
    R: ContentRepository,
{
    repository: R,
}

impl<R> DeleteArticleService<R>
where
    R: ContentRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteArticleUseCase for DeleteArticleService<R>
where
    R: ContentRepository,
{
    async fn execute(&self, id: Uuid) -> Result<(), DeleteArticleError> {
        self.repository.delete_article(id).await?;
        tracing::info!("Article {} deleted", id);
        Ok(())
    }
}
