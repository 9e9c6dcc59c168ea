use std::sync::Arc;

use crate::content::application::ports::incoming::use_cases::{
    CreateArticleUseCase, DeleteArticleUseCase, GetAboutUseCase, GetArticleUseCase,
    GetVisitSummaryUseCase, ListArticlesUseCase, ListWeddingPackagesUseCase,
    RecordVisitUseCase, SaveAboutUseCase, SaveWeddingPackagesUseCase,
};

#[derive(Clone)]
pub struct ContentUseCases {
    pub list_articles: Arc<dyn ListArticlesUseCase + Send + Sync>,
    pub get_article: Arc<dyn GetArticleUseCase + Send + Sync>,
    pub create_article: Arc<dyn CreateArticleUseCase + Send + Sync>,
    pub delete_article: Arc<dyn DeleteArticleUseCase + Send + Sync>,
    pub get_about: Arc<dyn GetAboutUseCase + Send + Sync>,
    pub save_about: Arc<dyn SaveAboutUseCase + Send + Sync>,
    pub list_packages: Arc<dyn ListWeddingPackagesUseCase + Send + Sync>,
    pub save_packages: Arc<dyn SaveWeddingPackagesUseCase + Send + Sync>,
    pub record_visit: Arc<dyn RecordVisitUseCase + Send + Sync>,
    pub visit_summary: Arc<dyn GetVisitSummaryUseCase + Send + Sync>,
}
