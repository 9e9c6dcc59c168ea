use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::content::application::domain::entities::VisitSummary;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SiteVisitQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SiteVisitQuery: Send + Sync {
    /// All-time totals, plus the number of visits strictly after `since`.
    async fn summarize(&self, since: DateTime<Utc>) -> Result<VisitSummary, SiteVisitQueryError>;
}
