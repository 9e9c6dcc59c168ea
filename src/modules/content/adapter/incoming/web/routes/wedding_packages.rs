use actix_web::{get, put, web, HttpResponse, Responder};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::AdminUser,
    content::application::{
        domain::entities::WeddingPackage,
        ports::incoming::use_cases::{
            ListWeddingPackagesError, SaveWeddingPackagesCommand, SaveWeddingPackagesCommandError,
            SaveWeddingPackagesError, WeddingPackageInput,
        },
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct SaveWeddingPackagesRequest {
    /// Display order is the array order.
    pub packages: Vec<WeddingPackageInput>,
}

//
// ──────────────────────────────────────────────────────────
// Routes
// ──────────────────────────────────────────────────────────
//

/// Wedding packages in display order
#[utoipa::path(
    get,
    path = "/api/wedding-packages",
    tag = "content",
    responses(
        (status = 200, description = "Packages", body = inline(SuccessResponse<Vec<WeddingPackage>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/wedding-packages")]
pub async fn list_wedding_packages_handler(data: web::Data<AppState>) -> impl Responder {
    match data.content.list_packages.execute().await {
        Ok(packages) => ApiResponse::success(packages),
        Err(ListWeddingPackagesError::RepositoryError(msg)) => {
            tracing::error!("Listing wedding packages failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

/// Save wedding packages
#[utoipa::path(
    put,
    path = "/api/admin/wedding-packages",
    tag = "admin",
    request_body = SaveWeddingPackagesRequest,
    responses(
        (status = 200, description = "Packages saved", body = inline(SuccessResponse<Vec<WeddingPackage>>)),
        (status = 400, description = "Blank name or repeated id", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[put("/api/admin/wedding-packages")]
pub async fn save_wedding_packages_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
    payload: web::Json<SaveWeddingPackagesRequest>,
) -> impl Responder {
    let command = match SaveWeddingPackagesCommand::new(payload.into_inner().packages) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.content.save_packages.execute(command).await {
        Ok(saved) => ApiResponse::success(saved),
        Err(SaveWeddingPackagesError::RepositoryError(msg)) => {
            tracing::error!("Saving wedding packages failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_command_error(err: SaveWeddingPackagesCommandError) -> HttpResponse {
    let code = match err {
        SaveWeddingPackagesCommandError::EmptyPackageName(_) => "EMPTY_PACKAGE_NAME",
        SaveWeddingPackagesCommandError::DuplicatePackageId(_) => "DUPLICATE_PACKAGE_ID",
    };
    ApiResponse::bad_request(code, &err.to_string())
}
