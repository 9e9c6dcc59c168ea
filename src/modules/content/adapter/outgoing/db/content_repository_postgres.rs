use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveValue::Set, DatabaseConnection, DbBackend, DbErr, EntityTrait,
    QueryTrait, Statement,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::content::application::{
    domain::entities::{AboutContent, Article, Credential, NewArticle, WeddingPackage},
    ports::outgoing::{ContentRepository, ContentRepositoryError},
};
use crate::shared::db::{execute_all_in_tx, SeaOrmTxDb, TxDb};

use super::content_query_postgres::{article_from_model, ABOUT_ROW_ID};
use super::sea_orm_entity::{about_content, about_credentials, articles, wedding_packages};

#[derive(Debug, Clone)]
pub struct ContentRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContentRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> ContentRepositoryError {
    ContentRepositoryError::DatabaseError(e.to_string())
}

fn map_slug_error(e: DbErr, slug: &str) -> ContentRepositoryError {
    let msg = e.to_string().to_lowercase();

    if (msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505"))
        && msg.contains("slug")
    {
        ContentRepositoryError::SlugTaken(slug.to_string())
    } else {
        map_db_err(e)
    }
}

/// Upsert the singleton bio row, then swap the whole credential list.
fn replace_about_statements(content: AboutContent, credentials: Vec<Credential>) -> Vec<Statement> {
    let upsert_content = about_content::Entity::insert(about_content::ActiveModel {
        id: Set(ABOUT_ROW_ID),
        name: Set(content.name),
        bio_p1: Set(content.bio_p1),
        bio_p2: Set(content.bio_p2),
        email: Set(content.email),
        phone: Set(content.phone),
        updated_at: Set(Utc::now().fixed_offset()),
    })
    .on_conflict(
        OnConflict::column(about_content::Column::Id)
            .update_columns([
                about_content::Column::Name,
                about_content::Column::BioP1,
                about_content::Column::BioP2,
                about_content::Column::Email,
                about_content::Column::Phone,
                about_content::Column::UpdatedAt,
            ])
            .to_owned(),
    )
    .build(DbBackend::Postgres);

    let clear_credentials = about_credentials::Entity::delete_many().build(DbBackend::Postgres);

    let mut stmts = vec![upsert_content, clear_credentials];

    if !credentials.is_empty() {
        let models = credentials
            .into_iter()
            .enumerate()
            .map(|(index, c)| about_credentials::ActiveModel {
                category: Set(c.category),
                title: Set(c.title),
                subtitle: Set(c.subtitle),
                sort_order: Set(index as i32),
                ..Default::default()
            });
        stmts.push(about_credentials::Entity::insert_many(models).build(DbBackend::Postgres));
    }

    stmts
}

async fn replace_about_with_db<D: TxDb>(
    db: &D,
    content: AboutContent,
    credentials: Vec<Credential>,
) -> Result<(), ContentRepositoryError> {
    execute_all_in_tx(db, replace_about_statements(content, credentials))
        .await
        .map_err(map_db_err)?;
    Ok(())
}

#[async_trait]
impl ContentRepository for ContentRepositoryPostgres {
    async fn insert_article(&self, article: NewArticle) -> Result<Article, ContentRepositoryError> {
        let slug = article.slug.as_str().to_string();
        let model = articles::Model {
            id: Uuid::new_v4(),
            slug: slug.clone(),
            title: article.title,
            publisher: article.publisher,
            description: article.description,
            image_url: article.image_url,
            link_url: article.link_url,
            published_date: article.published_date,
            position: article.position,
            created_at: Utc::now().fixed_offset(),
        };

        articles::Entity::insert(articles::ActiveModel::from(model.clone()))
            .exec_without_returning(&*self.db)
            .await
            .map_err(|e| map_slug_error(e, &slug))?;

        Ok(article_from_model(model))
    }

    async fn delete_article(&self, id: Uuid) -> Result<(), ContentRepositoryError> {
        let result = articles::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ContentRepositoryError::NotFound);
        }

        Ok(())
    }

    async fn replace_about(
        &self,
        content: AboutContent,
        credentials: Vec<Credential>,
    ) -> Result<(), ContentRepositoryError> {
        let tx_db = SeaOrmTxDb::new(self.db.clone());
        replace_about_with_db(&tx_db, content, credentials).await
    }

    async fn upsert_wedding_packages(
        &self,
        packages: Vec<WeddingPackage>,
    ) -> Result<u64, ContentRepositoryError> {
        if packages.is_empty() {
            return Ok(0);
        }

        let models = packages.into_iter().map(|p| wedding_packages::ActiveModel {
            id: Set(p.id),
            name: Set(p.name),
            time: Set(p.time),
            includes: Set(p.includes),
            images: Set(p.images),
            price: Set(p.price),
            highlight: Set(p.highlight),
            sort_order: Set(p.sort_order),
        });

        wedding_packages::Entity::insert_many(models)
            .on_conflict(
                OnConflict::column(wedding_packages::Column::Id)
                    .update_columns([
                        wedding_packages::Column::Name,
                        wedding_packages::Column::Time,
                        wedding_packages::Column::Includes,
                        wedding_packages::Column::Images,
                        wedding_packages::Column::Price,
                        wedding_packages::Column::Highlight,
                        wedding_packages::Column::SortOrder,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&*self.db)
            .await
            .map_err(map_db_err)
    }
}
