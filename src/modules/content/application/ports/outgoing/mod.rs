mod content_query;
mod content_repository;
mod site_visit_query;
mod site_visit_repository;

pub use content_query::{ContentQuery, ContentQueryError};
pub use content_repository::{ContentRepository, ContentRepositoryError};
pub use site_visit_query::{SiteVisitQuery, SiteVisitQueryError};
pub use site_visit_repository::{SiteVisitRepository, SiteVisitRepositoryError};
