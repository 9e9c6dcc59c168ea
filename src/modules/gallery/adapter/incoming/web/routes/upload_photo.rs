use actix_web::{post, web, Responder};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::AdminUser,
    gallery::application::ports::incoming::use_cases::{UploadPhotoCommand, UploadedPhoto},
    shared::api::ApiResponse,
    AppState,
};

use super::common::{map_upload_command_error, map_upload_error, parse_tag};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UploadPhotoQuery {
    /// Original file name; its extension decides the accepted formats.
    #[serde(rename = "fileName")]
    pub file_name: String,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Upload a photo
///
/// The request body is the raw image. The photo is tagged on the media host
/// and recorded first in the gallery order.
#[utoipa::path(
    post,
    path = "/api/admin/galleries/{tag}/photos",
    tag = "admin",
    params(("tag" = String, Path, description = "Gallery tag"), UploadPhotoQuery),
    request_body(content = String, content_type = "application/octet-stream", description = "Raw image bytes"),
    responses(
        (status = 201, description = "Photo uploaded", body = inline(SuccessResponse<UploadedPhoto>)),
        (status = 400, description = "Unknown tag or invalid file", body = ErrorResponse),
        (status = 409, description = "Photo already recorded", body = ErrorResponse),
        (status = 413, description = "File too large", body = ErrorResponse),
        (status = 502, description = "Media host rejected the upload", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[post("/api/admin/galleries/{tag}/photos")]
pub async fn upload_photo_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    query: web::Query<UploadPhotoQuery>,
    data: web::Data<AppState>,
    body: web::Bytes,
) -> impl Responder {
    let tag = match parse_tag(&path.into_inner()) {
        Ok(tag) => tag,
        Err(resp) => return resp,
    };

    let command = match UploadPhotoCommand::new(
        tag,
        &query.file_name,
        body.to_vec(),
        &data.gallery.upload_policy,
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_upload_command_error(err),
    };

    match data.gallery.upload_photo.execute(command).await {
        Ok(photo) => ApiResponse::created(photo),
        Err(err) => map_upload_error(err),
    }
}
