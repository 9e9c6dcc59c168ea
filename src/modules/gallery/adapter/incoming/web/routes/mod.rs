mod add_variant;
mod common;
mod delete_photo;
mod delete_variant;
mod get_gallery;
mod preview_order;
mod save_order;
mod update_description;
mod upload_photo;

pub use add_variant::*;
pub use delete_photo::*;
pub use delete_variant::*;
pub use get_gallery::*;
pub use preview_order::*;
pub use save_order::*;
pub use update_description::*;
pub use upload_photo::*;
