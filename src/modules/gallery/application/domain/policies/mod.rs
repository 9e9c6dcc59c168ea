pub mod gallery_merge;
pub mod upload_policy;
