use std::time::Duration;

pub const DEFAULT_DELIVERY_BASE_URL: &str = "https://res.cloudinary.com";
pub const DEFAULT_API_BASE_URL: &str = "https://api.cloudinary.com";

/// Transformation applied to every delivered gallery image.
pub const DELIVERY_TRANSFORMATION: &str = "f_auto,q_auto,c_fill,g_faces";

#[derive(Debug, Clone)]
pub struct CloudinaryConfig {
    pub cloud_name: String,
    pub upload_preset: String,
    pub delivery_base_url: String,
    pub api_base_url: String,
    pub listing_timeout: Duration,
    pub upload_timeout: Duration,
}

impl CloudinaryConfig {
    pub fn new(cloud_name: impl Into<String>, upload_preset: impl Into<String>) -> Self {
        Self {
            cloud_name: cloud_name.into(),
            upload_preset: upload_preset.into(),
            delivery_base_url: DEFAULT_DELIVERY_BASE_URL.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            listing_timeout: Duration::from_secs(10),
            upload_timeout: Duration::from_secs(60),
        }
    }

    /// `?cb=` defeats the CDN cache on the list endpoint.
    pub fn listing_url(&self, tag: &str, cache_buster: i64) -> String {
        format!(
            "{}/{}/image/list/{}.json?cb={}",
            self.delivery_base_url.trim_end_matches('/'),
            self.cloud_name,
            tag,
            cache_buster
        )
    }

    pub fn delivery_url(&self, public_id: &str, format: &str) -> String {
        format!(
            "{}/{}/image/upload/{}/{}.{}",
            self.delivery_base_url.trim_end_matches('/'),
            self.cloud_name,
            DELIVERY_TRANSFORMATION,
            public_id,
            format
        )
    }

    pub fn upload_url(&self) -> String {
        format!(
            "{}/v1_1/{}/image/upload",
            self.api_base_url.trim_end_matches('/'),
            self.cloud_name
        )
    }
}
