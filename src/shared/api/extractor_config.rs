use actix_web::web::{JsonConfig, PayloadConfig, QueryConfig};

use crate::shared::api::ApiResponse;

/// Headroom above the upload policy limit so oversized bodies reach the
/// policy check and get a descriptive error instead of a bare 413.
const UPLOAD_PAYLOAD_SLACK_BYTES: usize = 1024 * 1024;

pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::bad_request("VALIDATION_ERROR", &message),
        )
        .into()
    })
}

pub fn custom_query_config() -> QueryConfig {
    QueryConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::bad_request("INVALID_QUERY", &message),
        )
        .into()
    })
}

/// Raw-body limit for image uploads.
pub fn upload_payload_config(max_upload_bytes: usize) -> PayloadConfig {
    PayloadConfig::new(max_upload_bytes + UPLOAD_PAYLOAD_SLACK_BYTES)
}
