use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{DatabaseBackend, DatabaseConnection, FromQueryResult, Statement};
use std::sync::Arc;

use crate::content::application::{
    domain::entities::VisitSummary,
    ports::outgoing::{SiteVisitQuery, SiteVisitQueryError},
};

const SUMMARY_SQL: &str = r#"SELECT COUNT(*) AS total_visits, COUNT(DISTINCT visitor_hash) AS unique_visitors, COUNT(*) FILTER (WHERE visited_at > $1) AS last_24h FROM site_visits"#;

#[derive(Debug, FromQueryResult)]
struct SummaryRow {
    total_visits: i64,
    unique_visitors: i64,
    last_24h: i64,
}

#[derive(Debug, Clone)]
pub struct SiteVisitQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SiteVisitQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SiteVisitQuery for SiteVisitQueryPostgres {
    async fn summarize(&self, since: DateTime<Utc>) -> Result<VisitSummary, SiteVisitQueryError> {
        let row = SummaryRow::find_by_statement(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            SUMMARY_SQL,
            [since.into()],
        ))
        .one(&*self.db)
        .await
        .map_err(|e| SiteVisitQueryError::DatabaseError(e.to_string()))?;

        Ok(row
            .map(|r| VisitSummary {
                total_visits: r.total_visits.max(0) as u64,
                unique_visitors: r.unique_visitors.max(0) as u64,
                last_24h: r.last_24h.max(0) as u64,
            })
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use sea_orm::{DbErr, MockDatabase, Transaction, Value};
    use std::collections::BTreeMap;

    fn summary_row(total: i64, unique: i64, recent: i64) -> BTreeMap<String, Value> {
        BTreeMap::from([
            ("total_visits".to_string(), Value::BigInt(Some(total))),
            ("unique_visitors".to_string(), Value::BigInt(Some(unique))),
            ("last_24h".to_string(), Value::BigInt(Some(recent))),
        ])
    }

    fn since() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 5, 1, 12, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn summarize_maps_aggregate_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![summary_row(120, 37, 9)]])
            .into_connection();
        let query = SiteVisitQueryPostgres::new(Arc::new(db));

        let summary = query.summarize(since()).await.expect("expected Ok");

        assert_eq!(
            summary,
            VisitSummary {
                total_visits: 120,
                unique_visitors: 37,
                last_24h: 9,
            }
        );
    }

    #[tokio::test]
    async fn summarize_issues_one_aggregate_statement_bound_to_since() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![vec![summary_row(0, 0, 0)]])
                .into_connection(),
        );
        let query = SiteVisitQueryPostgres::new(db.clone());

        query.summarize(since()).await.expect("expected Ok");
        drop(query);

        let conn = Arc::try_unwrap(db).expect("query should be dropped first");
        let log = conn.into_transaction_log();
        assert_eq!(
            log,
            vec![Transaction::from_sql_and_values(
                DatabaseBackend::Postgres,
                SUMMARY_SQL,
                [since().into()],
            )]
        );
    }

    #[tokio::test]
    async fn summarize_without_row_is_zero() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<BTreeMap<String, Value>>::new()])
            .into_connection();
        let query = SiteVisitQueryPostgres::new(Arc::new(db));

        let summary = query.summarize(since()).await.expect("expected Ok");

        assert_eq!(summary, VisitSummary::default());
    }

    #[tokio::test]
    async fn summarize_propagates_db_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("connection reset".to_string())])
            .into_connection();
        let query = SiteVisitQueryPostgres::new(Arc::new(db));

        let err = query.summarize(since()).await.expect_err("expected Err");

        assert!(matches!(err, SiteVisitQueryError::DatabaseError(msg) if msg.contains("connection reset")));
    }
}
