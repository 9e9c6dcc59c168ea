use async_trait::async_trait;

use crate::content::application::{
    domain::entities::WeddingPackage,
    ports::{
        incoming::use_cases::{
            ListWeddingPackagesError, ListWeddingPackagesUseCase, SaveWeddingPackagesCommand,
            SaveWeddingPackagesError, SaveWeddingPackagesUseCase,
        },
        outgoing::{ContentQuery, ContentRepository},
    },
};

pub struct ListWeddingPackagesService<Q>
where
    Q: ContentQuery,
{
    query: Q,
}

impl<Q> ListWeddingPackagesService<Q>
where
    Q: ContentQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListWeddingPackagesUseCase for ListWeddingPackagesService<Q>
where
    Q: ContentQuery,
{
    async fn execute(&self) -> Result<Vec<WeddingPackage>, ListWeddingPackagesError> {
        self.query.list_wedding_packages().await.map_err(|e| {
            tracing::error!("Listing wedding packages failed: {}", e);
            ListWeddingPackagesError::from(e)
        })
    }
}

pub struct SaveWeddingPackagesService<R>
where
    R: ContentRepository,
{
    repository: R,
}

impl<R> SaveWeddingPackagesService<R>
where
    R: ContentRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> SaveWeddingPackagesUseCase for SaveWeddingPackagesService<R>
where
    R: ContentRepository,
{
    async fn execute(
        &self,
        command: SaveWeddingPackagesCommand,
    ) -> Result<Vec<WeddingPackage>, SaveWeddingPackagesError> {
        let packages = command.into_packages();
        if packages.is_empty() {
            return Ok(packages);
        }

        let written = self
            .repository
            .upsert_wedding_packages(packages.clone())
            .await
            .map_err(|e| {
                tracing::error!("Saving wedding packages failed: {}", e);
                SaveWeddingPackagesError::from(e)
            })?;

        tracing::info!("Wedding packages saved ({} rows)", written);
        Ok(packages)
    }
}
