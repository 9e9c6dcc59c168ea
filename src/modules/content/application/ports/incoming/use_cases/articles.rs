use async_trait::async_trait;
use uuid::Uuid;

use crate::content::application::{
    domain::{
        entities::{Article, NewArticle},
        slug::{Slug, SlugError},
    },
    ports::outgoing::{ContentQueryError, ContentRepositoryError},
};

pub const MAX_TITLE_CHARS: usize = 200;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListArticlesError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ContentQueryError> for ListArticlesError {
    fn from(err: ContentQueryError) -> Self {
        Self::RepositoryError(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetArticleError {
    #[error("Article not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ContentQueryError> for GetArticleError {
    fn from(err: ContentQueryError) -> Self {
        Self::RepositoryError(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateArticleCommandError {
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Title must not exceed {MAX_TITLE_CHARS} characters")]
    TitleTooLong,

    #[error(transparent)]
    InvalidSlug(#[from] SlugError),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateArticleError {
    #[error("Slug already taken: {0}")]
    SlugTaken(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ContentRepositoryError> for CreateArticleError {
    fn from(err: ContentRepositoryError) -> Self {
        match err {
            ContentRepositoryError::SlugTaken(slug) => Self::SlugTaken(slug),
            other => Self::RepositoryError(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeleteArticleError {
    #[error("Article not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ContentRepositoryError> for DeleteArticleError {
    fn from(err: ContentRepositoryError) -> Self {
        match err {
            ContentRepositoryError::NotFound => Self::NotFound,
            other => Self::RepositoryError(other.to_string()),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default)]
pub struct ArticleFields {
    pub title: String,
    /// Derived from the title when absent or blank.
    pub slug: Option<String>,
    pub publisher: String,
    pub description: String,
    pub image_url: Option<String>,
    pub link_url: Option<String>,
    pub published_date: Option<String>,
    pub position: i32,
}

#[derive(Debug, Clone)]
pub struct CreateArticleCommand {
    article: NewArticle,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl CreateArticleCommand {
    pub fn new(fields: ArticleFields) -> Result<Self, CreateArticleCommandError> {
        let title = fields.title.trim().to_string();
        if title.is_empty() {
            return Err(CreateArticleCommandError::EmptyTitle);
        }
        if title.chars().count() > MAX_TITLE_CHARS {
            return Err(CreateArticleCommandError::TitleTooLong);
        }

        let slug = match non_blank(fields.slug) {
            Some(raw) => Slug::parse(&raw)?,
            None => Slug::from_title(&title)?,
        };

        Ok(Self {
            article: NewArticle {
                slug,
                title,
                publisher: fields.publisher.trim().to_string(),
                description: fields.description.trim().to_string(),
                image_url: non_blank(fields.image_url),
                link_url: non_blank(fields.link_url),
                published_date: non_blank(fields.published_date),
                position: fields.position,
            },
        })
    }

    pub fn article(&self) -> &NewArticle {
        &self.article
    }

    pub fn into_article(self) -> NewArticle {
        self.article
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case traits
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ListArticlesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Article>, ListArticlesError>;
}

#[async_trait]
pub trait GetArticleUseCase: Send + Sync {
    async fn execute(&self, slug: &str) -> Result<Article, GetArticleError>;
}

#[async_trait]
pub trait CreateArticleUseCase: Send + Sync {
    async fn execute(&self, command: CreateArticleCommand) -> Result<Article, CreateArticleError>;
}

#[async_trait]
pub trait DeleteArticleUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), DeleteArticleError>;
}
