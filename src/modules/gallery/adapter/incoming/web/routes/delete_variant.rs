use actix_web::{delete, web, HttpResponse, Responder};

use crate::{
    api::schemas::ErrorResponse,
    auth::adapter::incoming::web::extractors::AdminUser,
    gallery::application::ports::incoming::use_cases::{DeleteVariantCommand, DeleteVariantError},
    shared::api::ApiResponse,
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Delete a variant
///
/// Variants are removed outright and never blacklisted.
#[utoipa::path(
    delete,
    path = "/api/admin/variants/{id}",
    tag = "admin",
    params(("id" = String, Path, description = "Variant public id")),
    responses(
        (status = 204, description = "Variant deleted"),
        (status = 400, description = "Blank id", body = ErrorResponse),
        (status = 404, description = "No such variant", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[delete("/api/admin/variants/{id}")]
pub async fn delete_variant_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match DeleteVariantCommand::new(&path.into_inner()) {
        Ok(cmd) => cmd,
        Err(_) => {
            return ApiResponse::bad_request("INVALID_VARIANT_ID", "Variant id must not be empty")
        }
    };

    match data.gallery.delete_variant.execute(command).await {
        Ok(()) => ApiResponse::no_content(),
        Err(err) => map_delete_variant_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_delete_variant_error(err: DeleteVariantError) -> HttpResponse {
    match err {
        DeleteVariantError::NotFound => {
            ApiResponse::not_found("VARIANT_NOT_FOUND", "Variant not found")
        }
        DeleteVariantError::RepositoryError(msg) => {
            tracing::error!("Deleting variant failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
