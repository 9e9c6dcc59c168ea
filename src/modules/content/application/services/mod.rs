mod about_services;
mod analytics_services;
mod article_services;
mod wedding_package_services;

pub use about_services::{GetAboutService, SaveAboutService};
pub use analytics_services::{GetVisitSummaryService, RecordVisitService};
pub use article_services::{
    CreateArticleService, DeleteArticleService, GetArticleService, ListArticlesService,
};
pub use wedding_package_services::{ListWeddingPackagesService, SaveWeddingPackagesService};
