use async_trait::async_trait;

use crate::content::application::{
    domain::entities::AboutPage,
    ports::{
        incoming::use_cases::{
            GetAboutError, GetAboutUseCase, SaveAboutCommand, SaveAboutError, SaveAboutUseCase,
        },
        outgoing::{ContentQuery, ContentRepository},
    },
};

pub struct GetAboutService<Q>
where
    Q: ContentQuery,
{
    query: Q,
}

impl<Q> GetAboutService<Q>
where
    Q: ContentQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetAboutUseCase for GetAboutService<Q>
where
    Q: ContentQuery,
{
    async fn execute(&self) -> Result<AboutPage, GetAboutError> {
        self.query.get_about().await.map_err(|e| {
            tracing::error!("Loading about page failed: {}", e);
            GetAboutError::from(e)
        })
    }
}

pub struct SaveAboutService<R>
where
    R: ContentRepository,
{
    repository: R,
}

impl<R> SaveAboutService<R>
where
    R: ContentRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> SaveAboutUseCase for SaveAboutService<R>
where
    R: ContentRepository,
{
    async fn execute(&self, command: SaveAboutCommand) -> Result<(), SaveAboutError> {
        let (content, credentials) = command.into_parts();
        let count = credentials.len();

        self.repository
            .replace_about(content, credentials)
            .await
            .map_err(|e| {
                tracing::error!("Saving about page failed: {}", e);
                SaveAboutError::from(e)
            })?;

        tracing::info!("About page saved with {} credentials", count);
        Ok(())
    }
}
