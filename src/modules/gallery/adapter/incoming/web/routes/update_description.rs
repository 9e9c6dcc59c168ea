use actix_web::{put, web, HttpResponse, Responder};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::AdminUser,
    gallery::application::ports::incoming::use_cases::{
        PhotoDescription, UpdateDescriptionCommand, UpdateDescriptionCommandError,
        UpdateDescriptionError,
    },
    shared::api::ApiResponse,
    AppState,
};

use super::common::invalid_photo_id;

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateDescriptionRequest {
    #[schema(example = "Golden hour at Söderåsen")]
    pub description: String,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Set a photo description
#[utoipa::path(
    put,
    path = "/api/admin/photos/{id}/description",
    tag = "admin",
    params(("id" = String, Path, description = "Photo public id")),
    request_body = UpdateDescriptionRequest,
    responses(
        (status = 200, description = "Description saved", body = inline(SuccessResponse<PhotoDescription>)),
        (status = 400, description = "Blank id or description too long", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[put("/api/admin/photos/{id}/description")]
pub async fn update_description_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
    payload: web::Json<UpdateDescriptionRequest>,
) -> impl Responder {
    let command = match UpdateDescriptionCommand::new(&path.into_inner(), &payload.description) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.gallery.update_description.execute(command).await {
        Ok(saved) => ApiResponse::success(saved),
        Err(err) => map_update_description_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_command_error(err: UpdateDescriptionCommandError) -> HttpResponse {
    match err {
        UpdateDescriptionCommandError::EmptyPhotoId => invalid_photo_id(),
        UpdateDescriptionCommandError::TooLong { .. } => {
            ApiResponse::bad_request("DESCRIPTION_TOO_LONG", &err.to_string())
        }
    }
}

fn map_update_description_error(err: UpdateDescriptionError) -> HttpResponse {
    match err {
        UpdateDescriptionError::RepositoryError(msg) => {
            tracing::error!("Saving photo description failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
