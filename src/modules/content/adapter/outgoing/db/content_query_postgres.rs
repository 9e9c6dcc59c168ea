use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;

use crate::content::application::{
    domain::entities::{AboutContent, AboutPage, Article, Credential, WeddingPackage},
    ports::outgoing::{ContentQuery, ContentQueryError},
};

use super::sea_orm_entity::{about_content, about_credentials, articles, wedding_packages};

pub(super) const ABOUT_ROW_ID: i32 = 1;

#[derive(Debug, Clone)]
pub struct ContentQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContentQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> ContentQueryError {
        ContentQueryError::DatabaseError(e.to_string())
    }
}

pub(super) fn article_from_model(m: articles::Model) -> Article {
    Article {
        id: m.id,
        slug: m.slug,
        title: m.title,
        publisher: m.publisher,
        description: m.description,
        image_url: m.image_url,
        link_url: m.link_url,
        published_date: m.published_date,
        position: m.position,
        created_at: m.created_at.with_timezone(&chrono::Utc),
    }
}

#[async_trait]
impl ContentQuery for ContentQueryPostgres {
    async fn list_articles(&self) -> Result<Vec<Article>, ContentQueryError> {
        let rows = articles::Entity::find()
            .order_by_desc(articles::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(rows.into_iter().map(article_from_model).collect())
    }

    async fn find_article_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<Article>, ContentQueryError> {
        let row = articles::Entity::find()
            .filter(articles::Column::Slug.eq(slug))
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(row.map(article_from_model))
    }

    async fn get_about(&self) -> Result<AboutPage, ContentQueryError> {
        let content = about_content::Entity::find_by_id(ABOUT_ROW_ID)
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?
            .map(|m| AboutContent {
                name: m.name,
                bio_p1: m.bio_p1,
                bio_p2: m.bio_p2,
                email: m.email,
                phone: m.phone,
            });

        let credentials = about_credentials::Entity::find()
            .order_by_asc(about_credentials::Column::SortOrder)
            .order_by_asc(about_credentials::Column::Id)
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?
            .into_iter()
            .map(|m| Credential {
                category: m.category,
                title: m.title,
                subtitle: m.subtitle,
            })
            .collect();

        Ok(AboutPage {
            content,
            credentials,
        })
    }

    async fn list_wedding_packages(&self) -> Result<Vec<WeddingPackage>, ContentQueryError> {
        let rows = wedding_packages::Entity::find()
            .order_by_asc(wedding_packages::Column::SortOrder)
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(rows
            .into_iter()
            .map(|m| WeddingPackage {
                id: m.id,
                name: m.name,
                time: m.time,
                includes: m.includes,
                images: m.images,
                price: m.price,
                highlight: m.highlight,
                sort_order: m.sort_order,
            })
            .collect())
    }
}
