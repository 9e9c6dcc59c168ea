use async_trait::async_trait;
use chrono::{Duration, Utc};

use crate::content::application::{
    domain::entities::VisitSummary,
    ports::{
        incoming::use_cases::{
            GetVisitSummaryUseCase, RecordVisitCommand, RecordVisitError, RecordVisitUseCase,
            VisitSummaryError,
        },
        outgoing::{SiteVisitQuery, SiteVisitRepository},
    },
};

pub struct RecordVisitService<R>
where
    R: SiteVisitRepository,
{
    repository: R,
}

impl<R> RecordVisitService<R>
where
    R: SiteVisitRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> RecordVisitUseCase for RecordVisitService<R>
where
    R: SiteVisitRepository,
{
    async fn execute(&self, command: RecordVisitCommand) -> Result<(), RecordVisitError> {
        let visit = command.into_visit();
        tracing::debug!("Recording visit to {}", visit.page_path);

        self.repository.insert_visit(visit).await.map_err(|e| {
            tracing::error!("Recording site visit failed: {}", e);
            RecordVisitError::from(e)
        })
    }
}

pub struct GetVisitSummaryService<Q>
where
    Q: SiteVisitQuery,
{
    query: Q,
}

impl<Q> GetVisitSummaryService<Q>
where
    Q: SiteVisitQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetVisitSummaryUseCase for GetVisitSummaryService<Q>
where
    Q: SiteVisitQuery,
{
    async fn execute(&self) -> Result<VisitSummary, VisitSummaryError> {
        let since = Utc::now() - Duration::hours(24);

        self.query.summarize(since).await.map_err(|e| {
            tracing::error!("Loading visit summary failed: {}", e);
            VisitSummaryError::from(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::content_fakes::InMemoryVisitLog;

    #[tokio::test]
    async fn recorded_visit_is_stored_as_given() {
        let log = InMemoryVisitLog::default();

        RecordVisitService::new(log.clone())
            .execute(RecordVisitCommand::new("/weddings", "abc123").unwrap())
            .await
            .unwrap();

        let visits = log.visits();
        assert_eq!(visits.len(), 1);
        assert_eq!(visits[0].page_path, "/weddings");
        assert_eq!(visits[0].visitor_hash, "abc123");
    }

    #[tokio::test]
    async fn write_failure_becomes_repository_error() {
        let log = InMemoryVisitLog::default();
        log.fail_writes();

        let err = RecordVisitService::new(log.clone())
            .execute(RecordVisitCommand::new("/", "abc").unwrap())
            .await
            .unwrap_err();

        assert!(matches!(err, RecordVisitError::RepositoryError(_)));
        assert!(log.visits().is_empty());
    }

    #[tokio::test]
    async fn summary_counts_totals_uniques_and_last_day() {
        let log = InMemoryVisitLog::default();
        let now = Utc::now();
        log.seed_visit("/", "a", now - Duration::days(3));
        log.seed_visit("/about", "a", now - Duration::hours(30));
        log.seed_visit("/", "b", now - Duration::hours(2));
        log.seed_visit("/weddings", "b", now - Duration::minutes(5));

        let summary = GetVisitSummaryService::new(log).execute().await.unwrap();

        assert_eq!(
            summary,
            VisitSummary {
                total_visits: 4,
                unique_visitors: 2,
                last_24h: 2,
            }
        );
    }

    #[tokio::test]
    async fn empty_log_gives_zero_summary() {
        let summary = GetVisitSummaryService::new(InMemoryVisitLog::default())
            .execute()
            .await
            .unwrap();

        assert_eq!(summary, VisitSummary::default());
    }

    #[tokio::test]
    async fn read_failure_becomes_repository_error() {
        let log = InMemoryVisitLog::default();
        log.fail_reads();

        let err = GetVisitSummaryService::new(log).execute().await.unwrap_err();

        assert!(matches!(err, VisitSummaryError::RepositoryError(_)));
    }
}
