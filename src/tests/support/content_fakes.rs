use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::content::application::{
    domain::entities::{
        AboutContent, AboutPage, Article, Credential, NewArticle, NewVisit, VisitSummary,
        WeddingPackage,
    },
    ports::outgoing::{
        ContentQuery, ContentQueryError, ContentRepository, ContentRepositoryError,
        SiteVisitQuery, SiteVisitQueryError, SiteVisitRepository, SiteVisitRepositoryError,
    },
};

#[derive(Default)]
struct ContentState {
    articles: Vec<Article>,
    about: Option<AboutContent>,
    credentials: Vec<Credential>,
    packages: Vec<WeddingPackage>,
    clock: i64,
    fail_reads: bool,
    fail_writes: bool,
}

impl ContentState {
    fn check_write(&self) -> Result<(), ContentRepositoryError> {
        if self.fail_writes {
            return Err(ContentRepositoryError::DatabaseError(
                "write failed".to_string(),
            ));
        }
        Ok(())
    }

    fn check_read(&self) -> Result<(), ContentQueryError> {
        if self.fail_reads {
            return Err(ContentQueryError::DatabaseError("read failed".to_string()));
        }
        Ok(())
    }
}

/// Behaves like the articles/about/wedding package tables.
/// Each inserted article is one minute newer than the previous one.
#[derive(Clone, Default)]
pub struct InMemoryContentStore {
    state: Arc<Mutex<ContentState>>,
}

impl InMemoryContentStore {
    pub fn fail_reads(&self) {
        self.state.lock().unwrap().fail_reads = true;
    }

    pub fn fail_writes(&self) {
        self.state.lock().unwrap().fail_writes = true;
    }

    pub fn article_slugs(&self) -> Vec<String> {
        let state = self.state.lock().unwrap();
        state.articles.iter().map(|a| a.slug.clone()).collect()
    }

    pub fn about_content(&self) -> Option<AboutContent> {
        self.state.lock().unwrap().about.clone()
    }

    pub fn credentials(&self) -> Vec<Credential> {
        self.state.lock().unwrap().credentials.clone()
    }

    pub fn packages(&self) -> Vec<WeddingPackage> {
        self.state.lock().unwrap().packages.clone()
    }
}

#[async_trait]
impl ContentQuery for InMemoryContentStore {
    async fn list_articles(&self) -> Result<Vec<Article>, ContentQueryError> {
        let state = self.state.lock().unwrap();
        state.check_read()?;
        let mut articles = state.articles.clone();
        articles.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(articles)
    }

    async fn find_article_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<Article>, ContentQueryError> {
        let state = self.state.lock().unwrap();
        state.check_read()?;
        Ok(state.articles.iter().find(|a| a.slug == slug).cloned())
    }

    async fn get_about(&self) -> Result<AboutPage, ContentQueryError> {
        let state = self.state.lock().unwrap();
        state.check_read()?;
        Ok(AboutPage {
            content: state.about.clone(),
            credentials: state.credentials.clone(),
        })
    }

    async fn list_wedding_packages(&self) -> Result<Vec<WeddingPackage>, ContentQueryError> {
        let state = self.state.lock().unwrap();
        state.check_read()?;
        let mut packages = state.packages.clone();
        packages.sort_by_key(|p| p.sort_order);
        Ok(packages)
    }
}

#[async_trait]
impl ContentRepository for InMemoryContentStore {
    async fn insert_article(&self, article: NewArticle) -> Result<Article, ContentRepositoryError> {
        let mut state = self.state.lock().unwrap();
        state.check_write()?;

        let slug = article.slug.as_str().to_string();
        if state.articles.iter().any(|a| a.slug == slug) {
            return Err(ContentRepositoryError::SlugTaken(slug));
        }

        state.clock += 1;
        let created_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
            + Duration::minutes(state.clock);

        let stored = Article {
            id: Uuid::new_v4(),
            slug,
            title: article.title,
            publisher: article.publisher,
            description: article.description,
            image_url: article.image_url,
            link_url: article.link_url,
            published_date: article.published_date,
            position: article.position,
            created_at,
        };
        state.articles.push(stored.clone());
        Ok(stored)
    }

    async fn delete_article(&self, id: Uuid) -> Result<(), ContentRepositoryError> {
        let mut state = self.state.lock().unwrap();
        state.check_write()?;
        let before = state.articles.len();
        state.articles.retain(|a| a.id != id);
        if state.articles.len() == before {
            return Err(ContentRepositoryError::NotFound);
        }
        Ok(())
    }

    async fn replace_about(
        &self,
        content: AboutContent,
        credentials: Vec<Credential>,
    ) -> Result<(), ContentRepositoryError> {
        let mut state = self.state.lock().unwrap();
        state.check_write()?;
        state.about = Some(content);
        state.credentials = credentials;
        Ok(())
    }

    async fn upsert_wedding_packages(
        &self,
        packages: Vec<WeddingPackage>,
    ) -> Result<u64, ContentRepositoryError> {
        let mut state = self.state.lock().unwrap();
        state.check_write()?;
        let count = packages.len() as u64;
        for package in packages {
            match state.packages.iter_mut().find(|p| p.id == package.id) {
                Some(existing) => *existing = package,
                None => state.packages.push(package),
            }
        }
        Ok(count)
    }
}

#[derive(Default)]
struct VisitState {
    visits: Vec<(NewVisit, DateTime<Utc>)>,
    fail_reads: bool,
    fail_writes: bool,
}

/// Behaves like the `site_visits` table; inserts are stamped with `Utc::now()`.
#[derive(Clone, Default)]
pub struct InMemoryVisitLog {
    state: Arc<Mutex<VisitState>>,
}

impl InMemoryVisitLog {
    pub fn seed_visit(&self, page_path: &str, visitor_hash: &str, visited_at: DateTime<Utc>) {
        self.state.lock().unwrap().visits.push((
            NewVisit {
                page_path: page_path.to_string(),
                visitor_hash: visitor_hash.to_string(),
            },
            visited_at,
        ));
    }

    pub fn fail_reads(&self) {
        self.state.lock().unwrap().fail_reads = true;
    }

    pub fn fail_writes(&self) {
        self.state.lock().unwrap().fail_writes = true;
    }

    pub fn visits(&self) -> Vec<NewVisit> {
        let state = self.state.lock().unwrap();
        state.visits.iter().map(|(v, _)| v.clone()).collect()
    }
}

#[async_trait]
impl SiteVisitRepository for InMemoryVisitLog {
    async fn insert_visit(&self, visit: NewVisit) -> Result<(), SiteVisitRepositoryError> {
        let mut state = self.state.lock().unwrap();
        if state.fail_writes {
            return Err(SiteVisitRepositoryError::DatabaseError(
                "write failed".to_string(),
            ));
        }
        state.visits.push((visit, Utc::now()));
        Ok(())
    }
}

#[async_trait]
impl SiteVisitQuery for InMemoryVisitLog {
    async fn summarize(&self, since: DateTime<Utc>) -> Result<VisitSummary, SiteVisitQueryError> {
        let state = self.state.lock().unwrap();
        if state.fail_reads {
            return Err(SiteVisitQueryError::DatabaseError("read failed".to_string()));
        }
        let unique: HashSet<&str> = state
            .visits
            .iter()
            .map(|(v, _)| v.visitor_hash.as_str())
            .collect();

        Ok(VisitSummary {
            total_visits: state.visits.len() as u64,
            unique_visitors: unique.len() as u64,
            last_24h: state.visits.iter().filter(|(_, at)| *at > since).count() as u64,
        })
    }
}
