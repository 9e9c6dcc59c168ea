use async_trait::async_trait;
use std::time::Duration;

#[derive(Debug, Clone)]
pub(super) struct HttpReply {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Failure below HTTP: the media host never produced a complete reply.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub(super) enum CloudinaryTransportError {
    #[error("Media host request timed out: {0}")]
    Timeout(String),

    #[error("Media host unreachable: {0}")]
    Connect(String),

    #[error("Media host response could not be read: {0}")]
    Body(String),
}

impl From<reqwest::Error> for CloudinaryTransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_body() || err.is_decode() {
            Self::Body(err.to_string())
        } else {
            Self::Connect(err.to_string())
        }
    }
}

#[derive(Debug, Clone)]
pub(super) struct UploadForm {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub upload_preset: String,
    pub tags: String,
}

/// Internal seam so the adapters can be tested without a live media host.
/// Errors are transport-level only; HTTP error statuses come back as replies.
#[async_trait]
pub(super) trait CloudinaryHttp: Send + Sync {
    async fn get(&self, url: &str, timeout: Duration)
        -> Result<HttpReply, CloudinaryTransportError>;

    async fn post_form(
        &self,
        url: &str,
        form: UploadForm,
        timeout: Duration,
    ) -> Result<HttpReply, CloudinaryTransportError>;
}

/// Production transport over a shared `reqwest::Client`.
#[derive(Clone)]
pub(super) struct ReqwestCloudinaryHttp {
    client: reqwest::Client,
}

impl ReqwestCloudinaryHttp {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    async fn into_reply(resp: reqwest::Response) -> Result<HttpReply, CloudinaryTransportError> {
        let status = resp.status().as_u16();
        let body = resp.bytes().await?;
        Ok(HttpReply {
            status,
            body: body.to_vec(),
        })
    }
}

#[async_trait]
impl CloudinaryHttp for ReqwestCloudinaryHttp {
    async fn get(
        &self,
        url: &str,
        timeout: Duration,
    ) -> Result<HttpReply, CloudinaryTransportError> {
        let resp = self
            .client
            .get(url)
            .timeout(timeout)
            .send()
            .await?;

        Self::into_reply(resp).await
    }

    async fn post_form(
        &self,
        url: &str,
        form: UploadForm,
        timeout: Duration,
    ) -> Result<HttpReply, CloudinaryTransportError> {
        let part = reqwest::multipart::Part::bytes(form.bytes).file_name(form.file_name);
        let multipart = reqwest::multipart::Form::new()
            .part("file", part)
            .text("upload_preset", form.upload_preset)
            .text("tags", form.tags);

        let resp = self
            .client
            .post(url)
            .multipart(multipart)
            .timeout(timeout)
            .send()
            .await?;

        Self::into_reply(resp).await
    }
}
