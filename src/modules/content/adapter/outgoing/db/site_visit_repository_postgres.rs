use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveValue::Set, DatabaseConnection, EntityTrait};
use std::sync::Arc;

use crate::content::application::{
    domain::entities::NewVisit,
    ports::outgoing::{SiteVisitRepository, SiteVisitRepositoryError},
};

use super::sea_orm_entity::site_visits;

#[derive(Debug, Clone)]
pub struct SiteVisitRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SiteVisitRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SiteVisitRepository for SiteVisitRepositoryPostgres {
    async fn insert_visit(&self, visit: NewVisit) -> Result<(), SiteVisitRepositoryError> {
        let model = site_visits::ActiveModel {
            page_path: Set(visit.page_path),
            visitor_hash: Set(visit.visitor_hash),
            visited_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        site_visits::Entity::insert(model)
            .exec_without_returning(&*self.db)
            .await
            .map_err(|e| SiteVisitRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
