use actix_web::{put, web, HttpResponse, Responder};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::AdminUser,
    gallery::application::{
        domain::draft::DraftItem,
        ports::incoming::use_cases::{SaveOrderCommand, SaveOrderError, SavedOrder},
    },
    shared::api::ApiResponse,
    AppState,
};

use super::common::{map_draft_error, parse_tag};

#[derive(Debug, Deserialize, ToSchema)]
pub struct SaveOrderRequest {
    /// Photos in display order; each index becomes the stored position.
    pub items: Vec<DraftItem>,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Save a gallery order
#[utoipa::path(
    put,
    path = "/api/admin/galleries/{tag}/order",
    tag = "admin",
    params(("tag" = String, Path, description = "Gallery tag")),
    request_body = SaveOrderRequest,
    responses(
        (status = 200, description = "Order saved", body = inline(SuccessResponse<SavedOrder>)),
        (status = 400, description = "Unknown tag, blank or duplicate id", body = ErrorResponse),
        (status = 401, description = "Missing or expired token", body = ErrorResponse),
        (status = 403, description = "Not the owner", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[put("/api/admin/galleries/{tag}/order")]
pub async fn save_order_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
    payload: web::Json<SaveOrderRequest>,
) -> impl Responder {
    let tag = match parse_tag(&path.into_inner()) {
        Ok(tag) => tag,
        Err(resp) => return resp,
    };

    let command = match SaveOrderCommand::new(tag, payload.into_inner().items) {
        Ok(cmd) => cmd,
        Err(err) => return map_draft_error(err),
    };

    match data.gallery.save_order.execute(command).await {
        Ok(saved) => ApiResponse::success(saved),
        Err(err) => map_save_order_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_save_order_error(err: SaveOrderError) -> HttpResponse {
    match err {
        SaveOrderError::RepositoryError(msg) => {
            tracing::error!("Saving gallery order failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
