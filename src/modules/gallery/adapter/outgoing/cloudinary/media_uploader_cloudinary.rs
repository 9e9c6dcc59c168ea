use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;

use super::cloudinary_config::CloudinaryConfig;
use super::http_client::{CloudinaryHttp, ReqwestCloudinaryHttp, UploadForm};
use crate::gallery::application::{
    domain::entities::UploadedAsset,
    ports::outgoing::media_host::{MediaUpload, MediaUploadError, MediaUploader},
};

#[derive(Debug, Deserialize)]
struct UploadResponse {
    public_id: String,
    secure_url: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Unsigned upload through the configured upload preset.
#[derive(Clone)]
pub struct CloudinaryMediaUploader {
    config: CloudinaryConfig,
    http: Arc<dyn CloudinaryHttp>,
}

impl CloudinaryMediaUploader {
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

    fn rejection_message(body: &[u8]) -> String {
        serde_json::from_slice::<ErrorResponse>(body)
            .map(|e| e.error.message)
            .unwrap_or_else(|_| String::from_utf8_lossy(body).into_owned())
    }
}

#[async_trait]
impl MediaUploader for CloudinaryMediaUploader {
    async fn upload(&self, upload: MediaUpload) -> Result<UploadedAsset, MediaUploadError> {
        let form = UploadForm {
            file_name: upload.file_name,
            bytes: upload.bytes,
            upload_preset: self.config.upload_preset.clone(),
            tags: upload.tags,
        };

        let reply = self
            .http
            .post_form(&self.config.upload_url(), form, self.config.upload_timeout)
            .await
            .map_err(|e| MediaUploadError::Network(e.to_string()))?;

        if !reply.is_success() {
            return Err(MediaUploadError::Rejected {
                status: reply.status,
                message: Self::rejection_message(&reply.body),
            });
        }

        let uploaded: UploadResponse = serde_json::from_slice(&reply.body)
            .map_err(|e| MediaUploadError::Decode(e.to_string()))?;

        Ok(UploadedAsset {
            public_id: uploaded.public_id,
            secure_url: uploaded.secure_url,
        })
    }
}
