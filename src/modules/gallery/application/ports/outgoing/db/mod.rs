mod photo_order_query;
mod photo_order_repository;

pub use photo_order_query::{PhotoOrderQuery, PhotoOrderQueryError};
pub use photo_order_repository::{
    DeletedPhoto, NewOrderRecord, NewVariantRecord, PhotoOrderRepository,
    PhotoOrderRepositoryError,
};
