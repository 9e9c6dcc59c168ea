use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbBackend, DbErr,
    EntityTrait, QueryFilter, QueryTrait, SqlErr, Statement,
};
use std::sync::Arc;

use crate::gallery::application::{
    domain::draft::OrderEntry,
    ports::outgoing::db::{
        DeletedPhoto, NewOrderRecord, NewVariantRecord, PhotoOrderRepository,
        PhotoOrderRepositoryError,
    },
};
use crate::shared::db::{execute_all_in_tx, SeaOrmTxDb, TxDb};

use super::sea_orm_entity::{photo_blacklist, photo_descriptions, photo_order, photo_variants};

#[derive(Debug, Clone)]
pub struct PhotoOrderRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PhotoOrderRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> PhotoOrderRepositoryError {
        PhotoOrderRepositoryError::DatabaseError(e.to_string())
    }

    fn map_insert_err(e: DbErr, id: &str) -> PhotoOrderRepositoryError {
        match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                PhotoOrderRepositoryError::AlreadyExists(id.to_string())
            }
            _ => Self::map_db_err(e),
        }
    }
}

/// Delete the order row, then blacklist the id. Both or neither.
fn delete_photo_statements(photo_id: &str) -> Vec<Statement> {
    let delete_order = photo_order::Entity::delete_many()
        .filter(photo_order::Column::Id.eq(photo_id))
        .build(DbBackend::Postgres);

    let blacklist = photo_blacklist::Entity::insert(photo_blacklist::ActiveModel {
        photo_id: Set(photo_id.to_string()),
        ..Default::default()
    })
    .on_conflict(
        OnConflict::column(photo_blacklist::Column::PhotoId)
            .do_nothing()
            .to_owned(),
    )
    .build(DbBackend::Postgres);

    vec![delete_order, blacklist]
}

async fn delete_photo_with_db<D: TxDb>(
    db: &D,
    photo_id: &str,
) -> Result<DeletedPhoto, PhotoOrderRepositoryError> {
    let affected = execute_all_in_tx(db, delete_photo_statements(photo_id))
        .await
        .map_err(PhotoOrderRepositoryPostgres::map_db_err)?;

    Ok(DeletedPhoto {
        photo_id: photo_id.to_string(),
        had_order_record: affected.first().copied().unwrap_or(0) > 0,
    })
}

#[async_trait]
impl PhotoOrderRepository for PhotoOrderRepositoryPostgres {
    async fn insert_photo(&self, record: NewOrderRecord) -> Result<(), PhotoOrderRepositoryError> {
        let id = record.id.clone();
        let model = photo_order::ActiveModel {
            id: Set(record.id),
            tag: Set(record.tag.as_str().to_string()),
            position: Set(record.position),
            url: Set(record.url),
            ..Default::default()
        };

        photo_order::Entity::insert(model)
            .exec_without_returning(&*self.db)
            .await
            .map_err(|e| Self::map_insert_err(e, &id))?;

        Ok(())
    }

    async fn upsert_order(
        &self,
        entries: Vec<OrderEntry>,
    ) -> Result<u64, PhotoOrderRepositoryError> {
        if entries.is_empty() {
            return Ok(0);
        }

        let models = entries.into_iter().map(|e| photo_order::ActiveModel {
            id: Set(e.id),
            tag: Set(e.tag.as_str().to_string()),
            position: Set(e.position),
            url: Set(e.url),
            ..Default::default()
        });

        photo_order::Entity::insert_many(models)
            .on_conflict(
                OnConflict::column(photo_order::Column::Id)
                    .update_columns([
                        photo_order::Column::Tag,
                        photo_order::Column::Position,
                        photo_order::Column::Url,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&*self.db)
            .await
            .map_err(Self::map_db_err)
    }

    async fn delete_photo(
        &self,
        photo_id: &str,
    ) -> Result<DeletedPhoto, PhotoOrderRepositoryError> {
        let tx_db = SeaOrmTxDb::new(self.db.clone());
        delete_photo_with_db(&tx_db, photo_id).await
    }

    async fn insert_variant(
        &self,
        record: NewVariantRecord,
    ) -> Result<(), PhotoOrderRepositoryError> {
        let id = record.id.clone();
        let model = photo_variants::ActiveModel {
            id: Set(record.id),
            parent_id: Set(record.parent_id),
            url: Set(record.url),
            position: Set(record.position),
            ..Default::default()
        };

        photo_variants::Entity::insert(model)
            .exec_without_returning(&*self.db)
            .await
            .map_err(|e| Self::map_insert_err(e, &id))?;

        Ok(())
    }

    async fn delete_variant(&self, variant_id: &str) -> Result<(), PhotoOrderRepositoryError> {
        let result = photo_variants::Entity::delete_by_id(variant_id.to_string())
            .exec(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        if result.rows_affected == 0 {
            return Err(PhotoOrderRepositoryError::NotFound);
        }

        Ok(())
    }

    async fn upsert_description(
        &self,
        photo_id: &str,
        description: &str,
    ) -> Result<(), PhotoOrderRepositoryError> {
        let model = photo_descriptions::ActiveModel {
            photo_id: Set(photo_id.to_string()),
            description: Set(description.to_string()),
            updated_at: Set(Utc::now().fixed_offset()),
        };

        photo_descriptions::Entity::insert(model)
            .on_conflict(
                OnConflict::column(photo_descriptions::Column::PhotoId)
                    .update_columns([
                        photo_descriptions::Column::Description,
                        photo_descriptions::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(())
    }
}
