mod cloudinary_config;
mod http_client;
mod media_listing_cloudinary;
mod media_uploader_cloudinary;

pub use cloudinary_config::CloudinaryConfig;
pub use media_listing_cloudinary::CloudinaryMediaListing;
pub use media_uploader_cloudinary::CloudinaryMediaUploader;
