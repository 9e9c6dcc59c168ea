use actix_web::HttpResponse;

use crate::gallery::application::{
    domain::{draft::DraftError, entities::GalleryTag, policies::upload_policy::UploadPolicyError},
    ports::incoming::use_cases::{UploadCommandError, UploadPhotoError},
};
use crate::shared::api::ApiResponse;

pub(super) fn parse_tag(raw: &str) -> Result<GalleryTag, HttpResponse> {
    raw.parse::<GalleryTag>().map_err(|e| {
        ApiResponse::bad_request("UNKNOWN_TAG", &format!("Unknown gallery tag: {}", e.0))
    })
}

pub(super) fn invalid_photo_id() -> HttpResponse {
    ApiResponse::bad_request("INVALID_PHOTO_ID", "Photo id must not be empty")
}

pub(super) fn map_draft_error(err: DraftError) -> HttpResponse {
    match err {
        DraftError::EmptyId(_) => ApiResponse::bad_request("INVALID_PHOTO_ID", &err.to_string()),
        DraftError::DuplicateId(_) => {
            ApiResponse::bad_request("DUPLICATE_PHOTO_ID", &err.to_string())
        }
        DraftError::IndexOutOfRange { .. } => {
            ApiResponse::bad_request("INVALID_EDIT", &err.to_string())
        }
    }
}

pub(super) fn map_upload_command_error(err: UploadCommandError) -> HttpResponse {
    match err {
        UploadCommandError::MissingParentId => invalid_photo_id(),
        UploadCommandError::InvalidFile(policy_err) => match policy_err {
            UploadPolicyError::InvalidFileName => {
                ApiResponse::bad_request("INVALID_FILE_NAME", "Invalid file name")
            }
            UploadPolicyError::InvalidExtension(_) => ApiResponse::bad_request(
                "INVALID_EXTENSION",
                "Only jpg, jpeg, png and webp images are accepted",
            ),
            UploadPolicyError::EmptyFile => ApiResponse::bad_request("EMPTY_FILE", "File is empty"),
            UploadPolicyError::FileTooLarge { .. } => {
                ApiResponse::payload_too_large("FILE_TOO_LARGE", &policy_err.to_string())
            }
        },
    }
}

pub(super) fn map_upload_error(err: UploadPhotoError) -> HttpResponse {
    match err {
        UploadPhotoError::UploadFailed(msg) => {
            tracing::warn!("Media host upload failed: {}", msg);
            ApiResponse::bad_gateway("UPLOAD_FAILED", "The media host rejected the upload")
        }
        UploadPhotoError::AlreadyExists(id) => ApiResponse::conflict(
            "PHOTO_ALREADY_EXISTS",
            &format!("Photo {id} is already recorded"),
        ),
        UploadPhotoError::RepositoryError(msg) => {
            tracing::error!("Recording uploaded photo failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
