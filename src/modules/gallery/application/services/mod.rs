mod add_variant_service;
mod delete_photo_service;
mod delete_variant_service;
mod preview_order_service;
mod resolve_gallery_service;
mod save_order_service;
mod update_description_service;
mod upload_photo_service;

pub use add_variant_service::AddVariantService;
pub use delete_photo_service::DeletePhotoService;
pub use delete_variant_service::DeleteVariantService;
pub use preview_order_service::PreviewOrderService;
pub use resolve_gallery_service::ResolveGalleryService;
pub use save_order_service::SaveOrderService;
pub use update_description_service::UpdateDescriptionService;
pub use upload_photo_service::UploadPhotoService;
