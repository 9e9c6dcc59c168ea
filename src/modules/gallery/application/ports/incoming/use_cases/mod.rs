mod add_variant;
mod delete_photo;
mod delete_variant;
mod preview_order;
mod resolve_gallery;
mod save_order;
mod update_description;
mod upload_photo;

pub use add_variant::{AddVariantCommand, AddVariantError, AddVariantUseCase, AddedVariant};
pub use delete_photo::{DeletePhotoCommand, DeletePhotoError, DeletePhotoUseCase, PhotoDeleted};
pub use delete_variant::{DeleteVariantCommand, DeleteVariantError, DeleteVariantUseCase};
pub use preview_order::{PreviewOrderCommand, PreviewOrderError, PreviewOrderUseCase};
pub use resolve_gallery::{ResolveGalleryCommand, ResolveGalleryError, ResolveGalleryUseCase};
pub use save_order::{SaveOrderCommand, SaveOrderError, SaveOrderUseCase, SavedOrder};
pub use update_description::{
    PhotoDescription, UpdateDescriptionCommand, UpdateDescriptionCommandError,
    UpdateDescriptionError, UpdateDescriptionUseCase, MAX_DESCRIPTION_CHARS,
};
pub use upload_photo::{
    UploadCommandError, UploadPhotoCommand, UploadPhotoError, UploadPhotoUseCase, UploadedPhoto,
};
