mod photo_order_query_postgres;
mod photo_order_repository_postgres;
pub mod sea_orm_entity;

pub use photo_order_query_postgres::PhotoOrderQueryPostgres;
pub use photo_order_repository_postgres::PhotoOrderRepositoryPostgres;
