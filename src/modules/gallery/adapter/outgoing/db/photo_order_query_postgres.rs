use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::gallery::application::{
    domain::entities::{GalleryTag, OrderedPhoto, PhotoVariant},
    ports::outgoing::db::{PhotoOrderQuery, PhotoOrderQueryError},
};

use super::sea_orm_entity::{photo_blacklist, photo_descriptions, photo_order, photo_variants};

#[derive(Debug, Clone)]
pub struct PhotoOrderQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PhotoOrderQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> PhotoOrderQueryError {
        PhotoOrderQueryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl PhotoOrderQuery for PhotoOrderQueryPostgres {
    async fn list_blacklist(&self) -> Result<HashSet<String>, PhotoOrderQueryError> {
        let rows = photo_blacklist::Entity::find()
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(rows.into_iter().map(|r| r.photo_id).collect())
    }

    async fn list_ordered(
        &self,
        tag: GalleryTag,
    ) -> Result<Vec<OrderedPhoto>, PhotoOrderQueryError> {
        let orders = photo_order::Entity::find()
            .filter(photo_order::Column::Tag.eq(tag.as_str()))
            .order_by_asc(photo_order::Column::Position)
            .order_by_asc(photo_order::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        if orders.is_empty() {
            return Ok(vec![]);
        }

        let ids: Vec<String> = orders.iter().map(|o| o.id.clone()).collect();

        let variant_rows = photo_variants::Entity::find()
            .filter(photo_variants::Column::ParentId.is_in(ids.clone()))
            .order_by_asc(photo_variants::Column::Position)
            .order_by_asc(photo_variants::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        let description_rows = photo_descriptions::Entity::find()
            .filter(photo_descriptions::Column::PhotoId.is_in(ids))
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        let mut variants: HashMap<String, Vec<PhotoVariant>> = HashMap::new();
        for row in variant_rows {
            variants
                .entry(row.parent_id.clone())
                .or_default()
                .push(row.to_variant());
        }

        let mut descriptions: HashMap<String, String> = description_rows
            .into_iter()
            .map(|d| (d.photo_id, d.description))
            .collect();

        Ok(orders
            .into_iter()
            .map(|o| {
                let photo_variants = variants.remove(&o.id).unwrap_or_default();
                let description = descriptions.remove(&o.id);
                o.to_ordered_photo(tag, photo_variants, description)
            })
            .collect())
    }
}
