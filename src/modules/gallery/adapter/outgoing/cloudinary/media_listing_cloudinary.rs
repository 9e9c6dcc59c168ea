use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;

use super::cloudinary_config::CloudinaryConfig;
use super::http_client::{CloudinaryHttp, ReqwestCloudinaryHttp};
use crate::gallery::application::{
    domain::entities::{GalleryTag, RemoteAsset},
    ports::outgoing::media_host::{MediaListing, MediaListingError},
};

#[derive(Debug, Deserialize)]
struct ListResponse {
    resources: Vec<ListedResource>,
}

#[derive(Debug, Deserialize)]
struct ListedResource {
    public_id: String,
    format: String,
}

/// Reads the public per-tag resource list (`image/list/{tag}.json`).
#[derive(Clone)]
pub struct CloudinaryMediaListing {
    config: CloudinaryConfig,
    http: Arc<dyn CloudinaryHttp>,
}

impl CloudinaryMediaListing {
    pub fn new(config: CloudinaryConfig, client: reqwest::Client) -> Self {
        Self {
            config,
            http: Arc::new(ReqwestCloudinaryHttp::new(client)),
        }
    }

    #[cfg(test)]
    fn with_http(config: CloudinaryConfig, http: Arc<dyn CloudinaryHttp>) -> Self {
        Self { config, http }
    }
}

#[async_trait]
impl MediaListing for CloudinaryMediaListing {
    async fn list_by_tag(&self, tag: GalleryTag) -> Result<Vec<RemoteAsset>, MediaListingError> {
        let cache_buster = chrono::Utc::now().timestamp_millis();
        let url = self.config.listing_url(tag.as_str(), cache_buster);

        let reply = self
            .http
            .get(&url, self.config.listing_timeout)
            .await
            .map_err(|e| MediaListingError::Network(e.to_string()))?;

        if !reply.is_success() {
            return Err(MediaListingError::Unavailable(reply.status));
        }

        let listing: ListResponse = serde_json::from_slice(&reply.body)
            .map_err(|e| MediaListingError::Decode(e.to_string()))?;

        Ok(listing
            .resources
            .into_iter()
            .map(|r| RemoteAsset {
                url: self.config.delivery_url(&r.public_id, &r.format),
                public_id: r.public_id,
                format: r.format,
            })
            .collect())
    }
}
