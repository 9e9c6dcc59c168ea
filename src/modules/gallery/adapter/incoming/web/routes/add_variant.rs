use actix_web::{post, web, Responder};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::AdminUser,
    gallery::application::ports::incoming::use_cases::{AddVariantCommand, AddedVariant},
    shared::api::ApiResponse,
    AppState,
};

use super::common::{map_upload_command_error, map_upload_error, parse_tag};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AddVariantQuery {
    /// Gallery of the parent photo; the variant is tagged `{tag}_variant`.
    pub tag: String,
    #[serde(rename = "fileName")]
    pub file_name: String,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Attach a variant to a photo
#[utoipa::path(
    post,
    path = "/api/admin/photos/{parent_id}/variants",
    tag = "admin",
    params(("parent_id" = String, Path, description = "Public id of the primary photo"), AddVariantQuery),
    request_body(content = String, content_type = "application/octet-stream", description = "Raw image bytes"),
    responses(
        (status = 201, description = "Variant uploaded", body = inline(SuccessResponse<AddedVariant>)),
        (status = 400, description = "Unknown tag or invalid file", body = ErrorResponse),
        (status = 409, description = "Variant already recorded", body = ErrorResponse),
        (status = 413, description = "File too large", body = ErrorResponse),
        (status = 502, description = "Media host rejected the upload", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[post("/api/admin/photos/{parent_id}/variants")]
pub async fn add_variant_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    query: web::Query<AddVariantQuery>,
    data: web::Data<AppState>,
    body: web::Bytes,
) -> impl Responder {
    let tag = match parse_tag(&query.tag) {
        Ok(tag) => tag,
        Err(resp) => return resp,
    };

    let command = match AddVariantCommand::new(
        &path.into_inner(),
        tag,
        &query.file_name,
        body.to_vec(),
        &data.gallery.upload_policy,
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_upload_command_error(err),
    };

    match data.gallery.add_variant.execute(command).await {
        Ok(variant) => ApiResponse::created(variant),
        Err(err) => map_upload_error(err),
    }
}
