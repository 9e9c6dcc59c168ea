mod media_listing;
mod media_uploader;

pub use media_listing::{MediaListing, MediaListingError};
pub use media_uploader::{MediaUpload, MediaUploadError, MediaUploader};
