mod content_query_postgres;
mod content_repository_postgres;
pub mod sea_orm_entity;
mod site_visit_query_postgres;
mod site_visit_repository_postgres;

pub use content_query_postgres::ContentQueryPostgres;
pub use content_repository_postgres::ContentRepositoryPostgres;
pub use site_visit_query_postgres::SiteVisitQueryPostgres;
pub use site_visit_repository_postgres::SiteVisitRepositoryPostgres;
