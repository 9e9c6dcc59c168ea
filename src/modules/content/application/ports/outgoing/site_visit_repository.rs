use async_trait::async_trait;

use crate::content::application::domain::entities::NewVisit;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SiteVisitRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SiteVisitRepository: Send + Sync {
    /// Stamped with the current time by the store.
    async fn insert_visit(&self, visit: NewVisit) -> Result<(), SiteVisitRepositoryError>;
}
