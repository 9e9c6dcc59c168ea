pub mod photo_blacklist;
pub mod photo_descriptions;
pub mod photo_order;
pub mod photo_variants;
